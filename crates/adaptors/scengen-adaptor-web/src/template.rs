//! Embedded single-page studio UI
//!
//! The page is served from a baked-in template with the sidebar navigation
//! labels and the canned prompt list rendered in at request time.

use scengen_core::{View, USER_PROMPTS};

/// Render the studio page with navigation and prompt data baked in
pub fn render_index() -> String {
    let nav_json =
        serde_json::to_string(&View::labels()).unwrap_or_else(|_| "[]".to_string());
    let prompts_json =
        serde_json::to_string(&USER_PROMPTS).unwrap_or_else(|_| "[]".to_string());
    studio_template(&nav_json, &prompts_json)
}

/// Studio page template
///
/// One view section per sidebar entry; visibility is toggled client side and
/// all state lives on the server behind the session id.
fn studio_template(nav_json: &str, prompts_json: &str) -> String {
    let template = r#"<!doctype html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>ADAS Logical Scenario Generator</title>
    <style>
      :root { --bg:#0f172a; --panel:#111827; --accent:#22d3ee; --text:#e5e7eb; --muted:#94a3b8; --ok:#10b981; --warn:#f59e0b; }
      * { box-sizing: border-box; }
      body { margin:0; background: radial-gradient(1200px 600px at 10% 10%, #0b1220 0%, #0f172a 60%, #0b1020 100%); color:var(--text); font-family: Inter, system-ui, -apple-system, Segoe UI, Roboto, sans-serif; }
      .wrap { display:grid; grid-template-columns: 280px 1fr; gap:24px; padding:24px; min-height:100vh; }
      .sidebar { background: rgba(255,255,255,0.03); border:1px solid rgba(255,255,255,0.08); border-radius:12px; padding:18px; align-self:start; }
      .brand { display:flex; align-items:center; gap:10px; font-weight:600; letter-spacing:.3px; margin-bottom:18px; }
      .dot { width:10px; height:10px; border-radius:50%; background:var(--ok); box-shadow:0 0 12px var(--ok); }
      .field { display:flex; flex-direction:column; gap:6px; margin-bottom:14px; }
      .field label { font-size:13px; font-weight:600; color:var(--muted); }
      input[type=text], input[type=email], select, textarea { padding:10px 12px; border-radius:10px; border:1px solid rgba(255,255,255,0.1); background:#0b1220; color:var(--text); font-family:inherit; font-size:14px; }
      textarea { resize:vertical; white-space:pre-wrap; }
      input[type=file] { color:var(--muted); font-size:13px; }
      input[type=range] { accent-color: var(--accent); }
      .nav-item { display:flex; align-items:center; gap:8px; padding:8px 10px; border-radius:8px; cursor:pointer; font-size:14px; }
      .nav-item:hover { background: rgba(255,255,255,0.05); }
      button { padding:10px 16px; border-radius:10px; border:1px solid rgba(255,255,255,0.1); background:#1f2937; color:var(--text); font-weight:600; cursor:pointer; }
      button.primary { border:0; background:linear-gradient(90deg, #22d3ee, #10b981); color:#051018; }
      .content { background: rgba(255,255,255,0.03); border:1px solid rgba(255,255,255,0.08); border-radius:12px; padding:24px; }
      .content h1 { margin:0 0 18px; font-size:26px; }
      .content h3 { margin:18px 0 10px; font-size:18px; }
      .view { display:none; }
      .view.active { display:block; }
      .muted { color:var(--muted); font-size:14px; }
      .warning { margin-top:12px; padding:10px 12px; border-left:3px solid var(--warn); background:rgba(245, 158, 11, .08); color:#fcd34d; border-radius:8px; font-size:14px; }
      .row { display:flex; gap:10px; margin-top:10px; }
      .chat-log { display:flex; flex-direction:column; gap:6px; min-height:200px; max-height:360px; overflow-y:auto; padding:12px; border:1px solid rgba(255,255,255,0.08); border-radius:10px; margin-bottom:12px; }
      .chat-line { padding:8px 10px; border-radius:10px; background:#0b2a22; border:1px solid #134e4a; font-size:14px; white-space:pre-wrap; }
      .chat-line.user { background:#1f2937; border-color:#374151; }
      .toggle { display:flex; align-items:center; gap:8px; margin:14px 0; font-size:14px; cursor:pointer; }
    </style>
    </head>
    <body>
      <div class="wrap">
        <aside class="sidebar">
          <div class="brand"><div class="dot"></div> Scenario Studio</div>
          <div class="field"><label>User Mail</label><input id="userMail" type="email" placeholder="Enter your email" /></div>
          <div class="field"><label>Navigation</label><div id="nav"></div></div>
          <div class="field"><label>Max Roles: <span id="maxRolesValue">2</span></label><input id="maxRoles" type="range" min="0" max="5" value="2" /></div>
        </aside>
        <main class="content">
          <h1>ADAS Logical Scenario Generator</h1>
          <section class="view" data-view="Welcome">
            <h3>👋 Welcome to the ADAS Scenario Generator</h3>
            <p class="muted">Use the sidebar to navigate through the app features.</p>
          </section>
          <section class="view" data-view="Upload Documents">
            <h3>📄 Upload Standard Document</h3>
            <div class="field"><label>Upload Standard Docs</label><input id="standardFiles" type="file" accept=".pdf,.txt,.docx" multiple /></div>
            <div id="standardStatus" class="muted"></div>
            <h3>📄 Upload Reference Document</h3>
            <div class="field"><label>Upload Reference Docs</label><input id="referenceFiles" type="file" accept=".pdf,.txt,.docx" multiple /></div>
            <div id="referenceStatus" class="muted"></div>
            <label class="toggle"><input id="previewToggle" type="checkbox" /> Preview Document</label>
            <div id="previewBox" class="field" style="display:none"><label>Document Preview</label><textarea id="previewText" rows="12" readonly></textarea></div>
          </section>
          <section class="view" data-view="Generate Scenario">
            <h3>🧠 Generate Logical Scenario</h3>
            <div class="field"><label>Choose Prompt</label><select id="promptSelect"></select></div>
            <div class="field"><label>Custom Prompt</label><textarea id="customPrompt" rows="4"></textarea></div>
            <button id="generateBtn" class="primary">🚀 Generate</button>
            <div id="generateWarning" class="warning" style="display:none"></div>
            <div id="responseBox" class="field" style="display:none; margin-top:14px"><label>Model Response</label><textarea id="modelResponse" rows="14" readonly></textarea></div>
          </section>
          <section class="view" data-view="Chat with Document">
            <h3>💬 Chat with Document</h3>
            <div id="chatLog" class="chat-log"></div>
            <div class="field"><label>Ask something about the document</label><input id="chatInput" type="text" /></div>
            <div class="row">
              <button id="chatSend" class="primary">Send</button>
              <button id="chatClear">Clear Chat</button>
            </div>
          </section>
          <section class="view" data-view="Export JSON">
            <h3>📦 Export Generated JSON</h3>
            <div id="exportWarning" class="warning" style="display:none">No JSON generated yet.</div>
            <button id="downloadBtn" class="primary" style="display:none">Download JSON</button>
          </section>
        </main>
      </div>
      <script>
        const NAV = {NAV_JSON};
        const PROMPTS = {PROMPTS_JSON};
        const state = { sessionId: null, response: '', generatedOutput: '', chatHistory: [] };
        let currentView = NAV[0];

        async function refreshSession() {
          if (!state.sessionId) return;
          try {
            const res = await fetch('/api/session/' + state.sessionId);
            if (!res.ok) return;
            const data = await res.json();
            state.response = data.response || '';
            state.generatedOutput = data.generatedOutput || '';
            state.chatHistory = data.chatHistory || [];
          } catch(e) {}
        }

        async function show(label) {
          currentView = label;
          await refreshSession();
          document.querySelectorAll('.view').forEach(el => {
            el.classList.toggle('active', el.dataset.view === label);
          });
          if (label === 'Generate Scenario') renderResponse();
          if (label === 'Chat with Document') renderChat();
          if (label === 'Export JSON') renderExport();
        }

        function buildNav() {
          const nav = document.getElementById('nav');
          nav.innerHTML = '';
          NAV.forEach((label, idx) => {
            const row = document.createElement('label');
            row.className = 'nav-item';
            const radio = document.createElement('input');
            radio.type = 'radio';
            radio.name = 'view';
            radio.value = label;
            radio.checked = idx === 0;
            radio.addEventListener('change', () => show(label));
            row.appendChild(radio);
            row.appendChild(document.createTextNode(label));
            nav.appendChild(row);
          });
        }

        function buildPrompts() {
          const sel = document.getElementById('promptSelect');
          PROMPTS.forEach(p => {
            const opt = document.createElement('option');
            opt.value = p;
            opt.textContent = p;
            sel.appendChild(opt);
          });
          const custom = document.getElementById('customPrompt');
          custom.value = sel.value;
          sel.addEventListener('change', () => { custom.value = sel.value; });
        }

        function readAsBase64(file) {
          return new Promise((resolve, reject) => {
            const reader = new FileReader();
            reader.onload = () => {
              const result = String(reader.result || '');
              const idx = result.indexOf(',');
              resolve(idx >= 0 ? result.slice(idx + 1) : result);
            };
            reader.onerror = () => reject(reader.error);
            reader.readAsDataURL(file);
          });
        }

        async function uploadFiles(slot, inputId, statusId) {
          const input = document.getElementById(inputId);
          const status = document.getElementById(statusId);
          if (!input.files.length) return;
          const files = [];
          for (const f of input.files) {
            files.push({ filename: f.name, content: await readAsBase64(f), base64Encoded: true, mimeType: f.type || null });
          }
          status.textContent = 'Uploading...';
          try {
            const res = await fetch('/api/upload', {
              method: 'POST',
              headers: { 'Content-Type': 'application/json' },
              body: JSON.stringify({ sessionId: state.sessionId, slot, files })
            });
            const data = await res.json();
            status.textContent = data.success ? 'Extracted ' + data.characters + ' characters.' : (data.error || 'Upload failed.');
          } catch(e) {
            status.textContent = 'Upload failed.';
          }
          await refreshPreview();
        }

        async function refreshPreview() {
          if (!document.getElementById('previewToggle').checked) return;
          try {
            const res = await fetch('/api/preview/' + state.sessionId);
            const data = await res.json();
            document.getElementById('previewText').value = data.preview || '';
          } catch(e) {}
        }

        function renderResponse() {
          document.getElementById('modelResponse').value = state.response;
          document.getElementById('responseBox').style.display = state.response ? 'flex' : 'none';
        }

        async function generate() {
          const warning = document.getElementById('generateWarning');
          warning.style.display = 'none';
          const res = await fetch('/api/generate', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ sessionId: state.sessionId, prompt: document.getElementById('customPrompt').value })
          });
          const data = await res.json();
          if (!data.success) {
            warning.textContent = data.warning || 'Generation failed.';
            warning.style.display = 'block';
            return;
          }
          state.response = data.response || '';
          if (data.generatedOutput) state.generatedOutput = data.generatedOutput;
          renderResponse();
        }

        function renderChat() {
          const log = document.getElementById('chatLog');
          log.innerHTML = '';
          state.chatHistory.forEach(line => {
            const el = document.createElement('div');
            el.className = line.indexOf('You: ') === 0 ? 'chat-line user' : 'chat-line';
            el.textContent = line;
            log.appendChild(el);
          });
          log.scrollTop = log.scrollHeight;
        }

        async function chatAction(path, body) {
          const res = await fetch(path, {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify(body)
          });
          const data = await res.json();
          state.chatHistory = data.history || [];
          renderChat();
        }

        function renderExport() {
          const empty = !state.generatedOutput;
          document.getElementById('exportWarning').style.display = empty ? 'block' : 'none';
          document.getElementById('downloadBtn').style.display = empty ? 'none' : 'inline-block';
        }

        document.getElementById('standardFiles').addEventListener('change', () => uploadFiles('standard', 'standardFiles', 'standardStatus'));
        document.getElementById('referenceFiles').addEventListener('change', () => uploadFiles('reference', 'referenceFiles', 'referenceStatus'));
        document.getElementById('previewToggle').addEventListener('change', async (e) => {
          document.getElementById('previewBox').style.display = e.target.checked ? 'flex' : 'none';
          await refreshPreview();
        });
        document.getElementById('generateBtn').addEventListener('click', generate);
        document.getElementById('chatSend').addEventListener('click', async () => {
          const input = document.getElementById('chatInput');
          await chatAction('/api/chat/send', { sessionId: state.sessionId, message: input.value });
          input.value = '';
        });
        document.getElementById('chatInput').addEventListener('keydown', (e) => {
          if (e.key === 'Enter') { e.preventDefault(); document.getElementById('chatSend').click(); }
        });
        document.getElementById('chatClear').addEventListener('click', () => chatAction('/api/chat/clear', { sessionId: state.sessionId }));
        document.getElementById('downloadBtn').addEventListener('click', () => {
          window.location.href = '/api/export/' + state.sessionId;
        });
        document.getElementById('maxRoles').addEventListener('input', (e) => {
          document.getElementById('maxRolesValue').textContent = e.target.value;
        });

        async function init() {
          const res = await fetch('/api/session', { method: 'POST' });
          const data = await res.json();
          state.sessionId = data.sessionId;
          buildNav();
          buildPrompts();
          await show(currentView);
        }
        init();
      </script>
    </body></html>"#;
    template
        .replace("{NAV_JSON}", nav_json)
        .replace("{PROMPTS_JSON}", prompts_json)
}

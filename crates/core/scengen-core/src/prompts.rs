//! Prompt constants and final-prompt composition

/// Expert system preamble prepended to every generation request
pub const EXPERT_PROMPT: &str = "You are an expert in ADAS functions and ADAS technology. \
You analyse requirement and standard documents for advanced driver assistance systems, \
extract key performance indicators, parameter space variables and logical scenario \
descriptions, and answer strictly from the supplied document text. Keep answers \
structured and concise, and return valid JSON whenever a JSON structure is requested.";

/// Canned prompts offered by the prompt selector, in display order
pub const USER_PROMPTS: [&str; 5] = [
    "Extract KPIs from the document",
    "List all PSVs and their descriptions",
    "Summarize the logical scenario",
    "Identify parameters relevant to ADAS",
    "Generate a JSON structure for the scenario",
];

/// Build the final prompt sent to the model
///
/// Concatenates the expert preamble, the (possibly edited) custom prompt,
/// and the combined document text, separated by blank lines, in that order.
pub fn compose_final_prompt(custom_prompt: &str, combined_text: &str) -> String {
    format!("{}\n\n{}\n\n{}", EXPERT_PROMPT, custom_prompt, combined_text)
}

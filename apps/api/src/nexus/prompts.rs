// Cross-cutting prompt fragments. Each flow keeps its own templates in
// flows/prompts.rs; this file holds the pieces every flow shares.

/// Lead-in for the JSON-shape instruction every prompt must end with.
/// The shape shown after it mirrors the flow's output type field-for-field;
/// the two are kept in lockstep whenever either changes.
pub const STRICT_JSON_PREAMBLE: &str = "Respond strictly in this JSON format:";

//! Formatting instructions wrapped around every user question
//!
//! The reply formatter only understands `**headline**` lines and `- ` bullets,
//! so the model is asked to answer in exactly that shape.

/// Instructions placed before the user's question
pub const FORMAT_INSTRUCTIONS: &str = r#"Please format your response according to these rules:
- Use "**text**" for bold text, which should appear on a new line
- When you see a bullet point, start the content on a new line
- Organize information clearly with proper spacing
- Be detailed and thorough in your response
- Provide at least 5-7 detailed points for each response
- Include specific examples and actionable steps

Here's the question: "#;

/// Reminder placed after the user's question
pub const FORMAT_REMINDER: &str = r"

Remember to:
1. Start with a bold headline summarizing the key point
2. Follow with detailed explanations
3. Include practical, actionable steps
4. End with a conclusion or next steps";

/// Wrap a raw question in the formatting instructions. The question is
/// embedded verbatim.
pub fn wrap_prompt(prompt: &str) -> String {
    let mut wrapped =
        String::with_capacity(FORMAT_INSTRUCTIONS.len() + prompt.len() + FORMAT_REMINDER.len());
    wrapped.push_str(FORMAT_INSTRUCTIONS);
    wrapped.push_str(prompt);
    wrapped.push_str(FORMAT_REMINDER);
    wrapped
}

/// Hard cap on transcript characters embedded in a prompt.
pub const MAX_TRANSCRIPT_CHARS: usize = 3000;

/// Build a deterministic guide-generation prompt for a tutorial video.
///
/// The transcript is cut to `MAX_TRANSCRIPT_CHARS` characters to bound
/// token cost; the ellipsis marker is appended whether or not anything was
/// cut. The JSON contract in the template is the only enforcement on the
/// model's output shape.
pub fn build_guide_prompt(title: &str, transcript: &str) -> String {
    let excerpt: String = transcript.chars().take(MAX_TRANSCRIPT_CHARS).collect();

    format!(
        "Analyze the following YouTube video transcript and title. Your task is to \
create a detailed, step-by-step guide for building the project or following \
the tutorial presented in the video.\n\
\n\
Title: {title}\n\
Transcript: {excerpt}...\n\
\n\
Follow these guidelines:\n\
1. Decide whether the video is a project tutorial or educational content \
suitable for a step-by-step guide.\n\
2. If it is suitable, create a guide with: an introduction describing the \
project and its goals, the prerequisites (tools, software, or knowledge \
required), detailed ordered steps (each with a short title, a clear \
description, and a code snippet or command when applicable), how to test \
or verify the result, and a conclusion with possible extensions.\n\
3. If it is not suitable, explain why.\n\
\n\
Respond with a single JSON object and nothing else:\n\
{{\n\
  \"isTutorial\": boolean,\n\
  \"reason\": string (only when not a tutorial),\n\
  \"guide\": {{\n\
    \"introduction\": string,\n\
    \"prerequisites\": array of strings,\n\
    \"steps\": array of objects with \"title\", \"description\", and optional \"code\",\n\
    \"testing\": string,\n\
    \"conclusion\": string\n\
  }}\n\
}}\n\
\n\
Rules:\n\
- Use only information present in the transcript.\n\
- Keep steps ordered and self-contained.\n\
- Keep the guide clear, concise, and easy to follow for beginners."
    )
}

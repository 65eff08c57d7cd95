//! Subtitle prompt value objects

/// System instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert at producing SRT subtitles from audio. \
Your output MUST be ONLY the raw SRT content in the requested language. \
Do not add any explanation, and do not wrap the output in markdown code blocks.";

/// Instruction template. `{language}` is replaced verbatim.
const TEMPLATE: &str = r#"Transcribe the provided audio and produce a subtitle file in SRT format. Follow these rules strictly:

1. **SRT Structure:**
    - Every entry has a sequence number, a timestamp line, and the subtitle text.
    - Entries are separated by exactly one blank line.

2. **Sequence Number:**
    - Start at 1 and increase by 1 for each entry.

3. **Timestamp:**
    - Use EXACTLY the format `hh:mm:ss,mmm` (e.g. 00:01:05,009).
    - The hours part (hh) is always present, even when it is 00.
    - Milliseconds always have three digits.
    - Separate start and end times with ` --> `.

4. **Subtitle Text:**
    - **CRITICAL:** the text of each entry MUST fit on a single line.
    - Keep lines short enough to read comfortably.
    - Split long sentences into several consecutive entries at natural pauses.
    - Remove all punctuation (commas, periods, question marks, etc.).
    - Remove filler words (e.g. um, ah, uh) and stutters.
    - Write the subtitles in {language}.

5. **Timing:**
    - Each entry should stay on screen for 3 to 5 seconds, adjusted to the speaking pace.
"#;

/// Instruction text asking the model for an SRT transcript in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitlePrompt {
    content: String,
}

impl SubtitlePrompt {
    /// Build the instruction for the given target language
    pub fn build(language: &str) -> Self {
        Self {
            content: TEMPLATE.replace("{language}", language),
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the content
    pub fn into_content(self) -> String {
        self.content
    }
}

//! Dialogue from an external assistant command.
//!
//! The prompt is passed as the final argument; the first non-empty line of
//! stdout becomes the NPC's line.

use crate::dialogue::{CannedDialogue, DialogueContext, DialogueProvider};
use crate::{HearthvaleError, HearthvaleResult};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shells out to a configured program for each line.
#[derive(Debug, Clone)]
pub struct CliDialogueProvider {
    pub program: String,
    /// Arguments placed before the prompt
    pub args: Vec<String>,
    pub timeout: Duration,
    fallback: CannedDialogue,
}

impl CliDialogueProvider {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            fallback: CannedDialogue,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the prompt sent to the assistant.
    pub fn prompt(npc_type: &str, context: &DialogueContext) -> String {
        let mut prompt = format!(
            "You are {}, a {} in a fantasy role-playing game.",
            context.npc_name, npc_type
        );
        if let (Some(settlement), Some(biome)) = (&context.settlement, context.biome) {
            prompt.push_str(&format!(" You live in {}, in the {}.", settlement, biome.name()));
        }
        match &context.player_message {
            Some(message) => prompt.push_str(&format!(" The traveler says: \"{}\".", message)),
            None => prompt.push_str(" A traveler approaches you."),
        }
        prompt.push_str(" Reply in character with one short line.");
        prompt
    }

    /// Runs the command once and returns its reply.
    pub async fn query(&self, prompt: &str) -> HearthvaleResult<String> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| {
                HearthvaleError::Dialogue(format!("{} timed out after {:?}", self.program, self.timeout))
            })??;

        if !output.status.success() {
            return Err(HearthvaleError::Dialogue(format!(
                "{} exited with {}",
                self.program, output.status
            )));
        }

        String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .ok_or_else(|| HearthvaleError::Dialogue(format!("{} produced no output", self.program)))
    }
}

impl DialogueProvider for CliDialogueProvider {
    async fn get_line(&self, npc_type: &str, context: &DialogueContext) -> String {
        match self.query(&Self::prompt(npc_type, context)).await {
            Ok(line) => line,
            Err(e) => {
                log::warn!("dialogue provider failed, using canned line: {}", e);
                self.fallback.line(npc_type, context)
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "cli"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::GENERIC_GREETING;
    use crate::game::Biome;

    #[test]
    fn test_prompt_mentions_context() {
        let context = DialogueContext::new("Mara")
            .in_settlement("Oakshire", Biome::Forest)
            .with_player_message("Any work?");
        let prompt = CliDialogueProvider::prompt("blacksmith", &context);
        assert!(prompt.contains("Mara"));
        assert!(prompt.contains("blacksmith"));
        assert!(prompt.contains("Oakshire"));
        assert!(prompt.contains("forest"));
        assert!(prompt.contains("Any work?"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_echo_reply_is_used() {
        let provider = CliDialogueProvider::new("echo").with_args(["Greetings,"]);
        let line = provider.get_line("guard", &DialogueContext::new("Bram")).await;
        assert!(line.starts_with("Greetings, You are Bram"));
    }

    #[tokio::test]
    async fn test_missing_program_falls_back() {
        let provider = CliDialogueProvider::new("hearthvale-no-such-assistant")
            .with_timeout(Duration::from_secs(2));
        let context = DialogueContext::new("Stranger");
        assert!(provider.query("hi").await.is_err());
        assert_eq!(provider.get_line("wanderer", &context).await, GENERIC_GREETING);
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_falls_back() {
        // The prompt lands in $0 and is ignored.
        let provider = CliDialogueProvider::new("sh")
            .with_args(["-c", "sleep 5"])
            .with_timeout(Duration::from_millis(100));
        let line = tokio_test::block_on(provider.get_line("farmer", &DialogueContext::new("Tam")));
        assert_eq!(line, CannedDialogue.line("farmer", &DialogueContext::new("Tam")));
    }
}

//! Built-in dialogue lines keyed by occupant type.

use crate::dialogue::{DialogueContext, DialogueProvider};

/// Spoken by any NPC whose occupant type has no lines of its own.
pub const GENERIC_GREETING: &str = "Hello there, traveler.";

/// Canned lines for an occupant type, or `None` if the type is unknown.
pub fn lines_for(npc_type: &str) -> Option<&'static [&'static str]> {
    let lines: &'static [&'static str] = match npc_type {
        "innkeeper" => &[
            "Welcome! A warm bed and a hot meal, if you've the coin.",
            "Rooms are upstairs. Mind the creaky step.",
            "Travelers bring the best stories. Sit, stay a while.",
        ],
        "merchant" => &[
            "Finest goods this side of the mountains!",
            "Take a look. Prices are fair, mostly.",
        ],
        "blacksmith" => &[
            "Need something forged? I work iron and steel.",
            "A dull blade is a dead adventurer. Let me sharpen that.",
        ],
        "elder" => &[
            "Our people have lived here for generations.",
            "Beware the wilds beyond the safe paths, young one.",
        ],
        "priest" => &[
            "May the light guide your steps.",
            "The chapel doors are always open to the weary.",
        ],
        "villager" => &[
            "Lovely weather today, isn't it?",
            "Have you met the elder? Wise old soul.",
        ],
        "farmer" => &[
            "The harvest looks good this year.",
            "Wolves have been eyeing the livestock again.",
        ],
        "nomad" => &[
            "The dunes shift, but the stars never lie.",
            "Water is worth more than gold out here.",
        ],
        "guard" => &[
            "Keep your weapons sheathed inside the walls.",
            "Quiet night so far. Let's keep it that way.",
        ],
        "trader" => &[
            "Furs, pelts, hides. Warmest you'll find.",
            "I trade with hunters from three valleys.",
        ],
        "hunter" => &[
            "Tracks in the snow tell you everything.",
            "Something big has been moving in the north woods.",
        ],
        "stablehand" => &[
            "Fresh horses, fed and rested.",
            "Mind the grey one, she bites.",
        ],
        "foreman" => &[
            "The vein runs deep. We need more hands.",
            "Helmets on in the tunnels, no exceptions.",
        ],
        "miner" => &[
            "Another day, another cart of ore.",
            "Heard strange noises from the lower shafts.",
        ],
        "fishmonger" => &[
            "Caught fresh this morning!",
            "Salted, smoked or raw. Take your pick.",
        ],
        "fisherman" => &[
            "The fish bite best at dawn.",
            "Storm's coming. I can smell it on the water.",
        ],
        "craftsman" => &[
            "Nets, rope, baskets. All made by hand.",
            "Good work takes patience.",
        ],
        _ => return None,
    };
    Some(lines)
}

/// Dialog list attached to a freshly spawned NPC.
///
/// # Examples
///
/// ```
/// use hearthvale::dialogue::{dialog_for, GENERIC_GREETING};
///
/// assert!(dialog_for("blacksmith").len() > 1);
/// assert_eq!(dialog_for("dragon"), vec![GENERIC_GREETING.to_string()]);
/// ```
pub fn dialog_for(npc_type: &str) -> Vec<String> {
    match lines_for(npc_type) {
        Some(lines) => lines.iter().map(|line| line.to_string()).collect(),
        None => vec![GENERIC_GREETING.to_string()],
    }
}

/// Provider that cycles through the built-in lines by conversation turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedDialogue;

impl CannedDialogue {
    /// Synchronous form of [`DialogueProvider::get_line`].
    pub fn line(&self, npc_type: &str, context: &DialogueContext) -> String {
        match lines_for(npc_type) {
            Some(lines) => lines[context.turn % lines.len()].to_string(),
            None => GENERIC_GREETING.to_string(),
        }
    }
}

impl DialogueProvider for CannedDialogue {
    async fn get_line(&self, npc_type: &str, context: &DialogueContext) -> String {
        self.line(npc_type, context)
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }
}

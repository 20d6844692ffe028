//! Card codes: `[[keyword]]` and `[[keyword:secondary]]` directives.
//!
//! A code resolves, in order of precedence, to:
//!
//! 1. `discard` / `exhaust`: a bare icon, any secondary ignored
//! 2. `nature`: read as `natural`
//! 3. a dice name: that die's icon, secondary defaulting to `power`
//! 4. `basic`: the `basic-magic` icon
//! 5. `main` / `side`: the action icons
//! 6. anything with an explicit secondary: the two words in italics
//! 7. anything else: a reference to the card with that name

use std::sync::OnceLock;

use regex::Regex;

use crate::document::InlineSegment;
use crate::error::MarkupError;

/// Dice names recognised when none are configured.
pub const DEFAULT_DICE: [&str; 8] = [
    "ceremonial",
    "charm",
    "divine",
    "fire",
    "illusion",
    "natural",
    "sympathy",
    "time",
];

fn card_code_regex() -> &'static Regex {
    static CARD_CODE: OnceLock<Regex> = OnceLock::new();
    CARD_CODE.get_or_init(|| {
        Regex::new(r"(?i)^(\*)?((?:[a-z \-]|&#x27;|&#39;)+)(?::([a-z \-]+))?$")
            .expect("Invalid card code regex")
    })
}

/// The dice names and keyword aliases card codes are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardCodeTable {
    dice: Vec<String>,
}

impl Default for CardCodeTable {
    fn default() -> Self {
        Self {
            dice: DEFAULT_DICE.iter().map(|die| die.to_string()).collect(),
        }
    }
}

impl CardCodeTable {
    /// Build a table from dice names, which must be lowercase ASCII words.
    pub fn new<I, S>(dice: I) -> Result<Self, MarkupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dice = dice
            .into_iter()
            .map(|die| {
                let die = die.as_ref().trim();
                if die.is_empty() || !die.chars().all(|c| c.is_ascii_lowercase()) {
                    return Err(MarkupError::InvalidDiceKeyword {
                        keyword: die.to_string(),
                    });
                }
                Ok(die.to_string())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { dice })
    }

    pub fn dice(&self) -> &[String] {
        &self.dice
    }

    pub fn is_dice(&self, keyword: &str) -> bool {
        self.dice.iter().any(|die| die == keyword)
    }

    /// Resolve directive content as a card code.
    ///
    /// Returns `None` when the content is not card-code shaped, in which
    /// case the directive stays literal.
    pub fn resolve(&self, content: &str, legacy: bool) -> Option<InlineSegment> {
        let caps = card_code_regex().captures(content)?;
        let typed = caps.get(2)?.as_str().trim();
        if typed.is_empty() {
            return None;
        }
        let typed_secondary = caps
            .get(3)
            .map(|m| m.as_str().trim())
            .filter(|secondary| !secondary.is_empty());

        let icon = |primary: &str, secondary: Option<&str>| InlineSegment::Icon {
            primary: stub(primary),
            secondary: secondary.map(stub),
            fallback: format!("[[{content}]]"),
        };

        let mut primary = typed.to_lowercase();
        if primary == "discard" || primary == "exhaust" {
            return Some(icon(&primary, None));
        }
        if primary == "nature" {
            primary = "natural".to_string();
        }

        let segment = if self.is_dice(&primary) {
            icon(&primary, Some(typed_secondary.unwrap_or("power")))
        } else if primary == "basic" {
            icon(&primary, Some("magic"))
        } else if primary == "main" || primary == "side" {
            icon(&primary, Some("action"))
        } else if let Some(secondary) = typed_secondary {
            InlineSegment::Emphasis(vec![InlineSegment::Text(format!("{typed} {secondary}"))])
        } else {
            InlineSegment::CardReference {
                name: typed.to_string(),
                stub: stub(typed),
                legacy,
            }
        };
        Some(segment)
    }
}

/// Lower-cased name with whitespace runs collapsed to single hyphens.
///
/// Used for card stubs and for icon class names.
pub fn stub(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

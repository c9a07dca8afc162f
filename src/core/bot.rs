use regex::Regex;

/// Rule-based demo chatbot.
///
/// Responses come from a fixed keyword-to-response table; there is no model
/// behind this. A real deployment would swap this for a hosted chat service.
#[derive(Debug, Clone)]
pub struct CampusBot {
    rules: Vec<(Regex, &'static str)>,
}

const EMPTY_PROMPT: &str = "Ask me about events, peer matching, or Google programs.";

const FALLBACK: &str = "I can help with Events, Peer Connect, and Career resources. \
Try asking: \"upcoming events\" or \"find a mentor\".";

impl CampusBot {
    /// Compile the keyword rule table.
    pub fn new() -> Result<Self, regex::Error> {
        let rules = vec![
            (
                Regex::new(r"(event|workshop|hackathon)")?,
                "Upcoming: \"Intro to Google Cloud + Firebase\" on 2025-09-15 at CSE Seminar Hall. Check Event Hub.",
            ),
            (
                Regex::new(r"(gdsc|google|program|gsoc|step)")?,
                "Explore Career Hub — Google programs like GSoC, STEP, Cloud Skills Boost are great.",
            ),
            (
                Regex::new(r"(mentor|study|team|group)")?,
                "Use Peer Connect: filter by skills/interests to find teammates or mentors.",
            ),
            (
                Regex::new(r"(contact|help|ambassador|lead)")?,
                "Contact the Campus Ambassador via the Help menu in-app.",
            ),
        ];

        Ok(Self { rules })
    }

    /// Produce a canned reply for a user message.
    ///
    /// Matching is case-insensitive; the first rule that fires wins. Blank
    /// messages get the usage prompt, unmatched messages the fallback line.
    pub fn reply(&self, message: &str) -> String {
        let msg = message.trim().to_lowercase();
        if msg.is_empty() {
            return EMPTY_PROMPT.to_string();
        }

        for (pattern, response) in &self.rules {
            if pattern.is_match(&msg) {
                return response.to_string();
            }
        }

        FALLBACK.to_string()
    }

    /// The greeting seeded into a fresh chat history.
    pub fn greeting() -> &'static str {
        "Hi! I am CampusBot. Ask me about events, peer matching, or Google programs."
    }
}

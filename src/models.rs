//! Frontend Models
//!
//! Static content types and form payloads.

use serde::{Deserialize, Serialize};

/// Archetype quiz question; option `i` votes for archetype `i`
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub text: &'static str,
    pub options: [&'static str; 5],
}

/// Personality category produced by the archetype quiz
#[derive(Debug, Clone, PartialEq)]
pub struct Archetype {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub traits: [&'static str; 5],
}

/// Daily quiz question with a known correct option
#[derive(Debug, Clone, PartialEq)]
pub struct DailyQuestion {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub age: u32,
}

/// Affirmation clip played from `/audio/{id}.mp3`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioClip {
    pub id: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
}

impl AudioClip {
    pub fn src(&self) -> String {
        format!("/audio/{}.mp3", self.id)
    }
}

/// Contact form payload (only ever logged)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// All fields non-empty, matching the browser's `required` check:
    /// whitespace-only values are accepted
    pub fn is_complete(&self) -> bool {
        ![&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_message_complete() {
        let mut msg = ContactMessage {
            name: "Dan".to_string(),
            email: "dan@example.com".to_string(),
            message: "Hello".to_string(),
        };
        assert!(msg.is_complete());
        msg.message = "   ".to_string();
        assert!(msg.is_complete());
        msg.message.clear();
        assert!(!msg.is_complete());
    }

    #[test]
    fn test_contact_payload_shape() {
        let msg = ContactMessage {
            name: "Dan".to_string(),
            email: "dan@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["name"], "Dan");
        assert_eq!(json["email"], "dan@example.com");
        assert_eq!(json["message"], "Hello");
    }

    #[test]
    fn test_clip_src() {
        let clip = AudioClip { id: "control", text: "I am in control.", icon: "🛡" };
        assert_eq!(clip.src(), "/audio/control.mp3");
    }
}

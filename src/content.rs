//! Page Content
//!
//! Fixed question sets, prompts, testimonials and clips.

use crate::models::{Archetype, AudioClip, DailyQuestion, Question, Testimonial};

pub static QUESTIONS: [Question; 5] = [
    Question {
        text: "When faced with a challenge, your first instinct is to:",
        options: [
            "Analyze all possible solutions before acting",
            "Take immediate action to overcome it",
            "Seek wisdom from mentors or books",
            "Find creative ways around the obstacle",
            "Inspire others to help solve it together",
        ],
    },
    Question {
        text: "Your greatest source of power comes from:",
        options: [
            "Your intellect and strategic thinking",
            "Your physical strength and courage",
            "Your wisdom and spiritual connection",
            "Your creativity and adaptability",
            "Your charisma and leadership",
        ],
    },
    Question {
        text: "In a relationship, you value most:",
        options: [
            "Intellectual stimulation and deep conversations",
            "Loyalty and mutual respect",
            "Spiritual connection and growth",
            "Freedom and spontaneity",
            "Passion and emotional intensity",
        ],
    },
    Question {
        text: "Your shadow (negative) tendency under stress is:",
        options: [
            "Overthinking and detachment",
            "Aggression and domination",
            "Withdrawal and rigidity",
            "Manipulation and deception",
            "Narcissism and controlling behavior",
        ],
    },
    Question {
        text: "Your life mission is primarily about:",
        options: [
            "Discovering truth and knowledge",
            "Protecting what matters and conquering challenges",
            "Achieving wisdom and guiding others",
            "Creating and exploring possibilities",
            "Leading others and building legacy",
        ],
    },
];

pub static ARCHETYPES: [Archetype; 5] = [
    Archetype {
        id: "sage",
        name: "The Sage",
        description: "You seek truth and wisdom above all. Your analytical mind and thirst for knowledge make you a natural problem-solver and advisor.",
        traits: ["Strategic", "Analytical", "Wise", "Objective", "Thoughtful"],
    },
    Archetype {
        id: "warrior",
        name: "The Warrior",
        description: "You embody courage and discipline. Your strength lies in your ability to face challenges head-on and protect what matters most.",
        traits: ["Courageous", "Disciplined", "Protective", "Direct", "Resilient"],
    },
    Archetype {
        id: "magician",
        name: "The Magician",
        description: "You see beyond the ordinary. Your intuition and connection to deeper wisdom allows you to transform situations and manifest your vision.",
        traits: ["Intuitive", "Transformative", "Visionary", "Spiritual", "Insightful"],
    },
    Archetype {
        id: "explorer",
        name: "The Explorer",
        description: "You value freedom and discovery. Your adaptability and creativity help you find unique paths and solutions others miss.",
        traits: ["Adaptable", "Creative", "Independent", "Adventurous", "Resourceful"],
    },
    Archetype {
        id: "king",
        name: "The King",
        description: "You are a natural leader. Your charisma and vision inspire others, and you excel at creating order and building lasting structures.",
        traits: ["Authoritative", "Visionary", "Responsible", "Charismatic", "Decisive"],
    },
];

pub static DAILY_QUESTIONS: [DailyQuestion; 5] = [
    DailyQuestion {
        question: "What is the primary benefit of breathwork?",
        options: ["Weight loss", "Energy control", "Muscle growth", "Hair growth"],
        correct: 1,
    },
    DailyQuestion {
        question: "How long should you practice semen retention for optimal benefits?",
        options: ["1-3 days", "7-14 days", "21+ days", "It varies by individual"],
        correct: 3,
    },
    DailyQuestion {
        question: "Which emotion most depletes masculine energy?",
        options: ["Anger", "Fear", "Sadness", "Jealousy"],
        correct: 1,
    },
    DailyQuestion {
        question: "What is the best way to redirect sexual energy?",
        options: ["Suppression", "Cold showers", "Creative pursuits", "Physical exercise"],
        correct: 2,
    },
    DailyQuestion {
        question: "Which practice is most effective for building masculine presence?",
        options: ["Meditation", "Weight lifting", "Fasting", "Grounding"],
        correct: 0,
    },
];

pub static REFLECTION_PROMPTS: [&str; 10] = [
    "What are you avoiding right now?",
    "Is this how a king would act?",
    "Where are you leaking energy?",
    "What would your highest self do?",
    "Are you living with purpose or distraction?",
    "What fear is holding you back?",
    "Are you in your masculine or feminine energy?",
    "What boundaries need to be set?",
    "Are you leading or following?",
    "What discipline have you neglected today?",
];

pub static TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        quote: "The energy redirection techniques changed everything. I'm more focused, confident, and women can sense it.",
        name: "Marcus",
        age: 32,
    },
    Testimonial {
        quote: "I was skeptical at first, but by week 3 I felt a power I hadn't experienced since my early 20s.",
        name: "Jason",
        age: 41,
    },
    Testimonial {
        quote: "This protocol should be taught to every young man. It's the missing manual for masculine energy.",
        name: "David",
        age: 29,
    },
    Testimonial {
        quote: "My wife noticed the difference before I did. She says I'm more present and decisive now.",
        name: "Michael",
        age: 37,
    },
    Testimonial {
        quote: "After years of feeling drained and foggy, I finally feel clear and powerful again.",
        name: "Robert",
        age: 45,
    },
];

pub static AUDIO_CLIPS: [AudioClip; 3] = [
    AudioClip { id: "control", text: "I am in control.", icon: "🛡" },
    AudioClip { id: "command", text: "Energy is mine to command.", icon: "🔥" },
    AudioClip { id: "attract", text: "I don't chase. I attract.", icon: "🔊" },
];

/// Hero headline endings cycled by the typewriter
pub static HERO_WORDS: [&str; 4] = ["in control?", "in command?", "awake?", "disciplined?"];

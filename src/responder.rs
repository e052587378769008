// src/responder.rs
//! Rule-based dialogue responder for the site assistant.
//!
//! Rules are checked in table order against the lowercased input and the
//! first rule with a matching keyword wins. Nothing is scored or merged, so
//! a keyword shared by two rules always resolves to the earlier one.

use serde::Serialize;

use crate::page::NavigationTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
    pub navigation: Option<NavigationTarget>,
}

impl IntentRule {
    /// `normalized` must already be lowercased.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized.contains(keyword))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub text: &'static str,
    pub navigation: Option<NavigationTarget>,
    /// Name of the rule that produced the reply, `None` for the fallback.
    pub rule: Option<&'static str>,
}

pub const FALLBACK_REPLY: &str = "Hi! I'd be happy to help! You can ask me about Paras's experience, skills, projects, education, or how to contact him. Try asking something like 'Tell me about his experience' or 'How can I contact him?'";

pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        name: "introduction",
        keywords: &["about", "who", "introduction"],
        reply: "Paras is a curious problem-solver who thrives on challenges across domains. Combining technical skills with creative thinking, he delivers practical solutions with determination. Outside work, he enjoys cycling, traveling, exploring cultures, and pursuing projects that fuel his growth.",
        navigation: Some(NavigationTarget::About),
    },
    IntentRule {
        name: "experience",
        keywords: &["experience", "work", "job"],
        reply: "Paras has professional experience at DAF Trucks N.V. (Software Integration & Dashboard Development) and Versuni (Machine learning Engineer & Embedded systems). Let me take you to the Experience section!",
        navigation: Some(NavigationTarget::Experience),
    },
    IntentRule {
        name: "skills",
        keywords: &["skill", "technology", "tech"],
        reply: "Paras specializes in:\n• Embedded Software\n• Azure DevOps (Functions, Storage, App Insights)\n• Python & Scripting\n• STM32 & Microcontrollers\n• Power BI / Grafana Dashboards\n• Test Automation in Tosca & Postman\n\nHe also has experience with IoT & Sensors, Git & CI/CD, and Cloud & Monitoring.",
        navigation: None,
    },
    IntentRule {
        name: "projects",
        keywords: &["project", "portfolio", "work"],
        reply: "Paras has worked on various projects including embedded systems, dashboard development, and machine learning applications. I'm taking you to the Projects section to see his work!",
        navigation: Some(NavigationTarget::Projects),
    },
    IntentRule {
        name: "certifications",
        keywords: &["certification", "certificate"],
        reply: "Paras has certifications from Microsoft and Fontys University. Let me show you the Certifications section!",
        navigation: Some(NavigationTarget::Certifications),
    },
    IntentRule {
        name: "contact",
        keywords: &["contact", "email", "reach", "meet", "hire"],
        reply: "You can reach Paras at prskhsl@gmail.com or connect with him on LinkedIn and Instagram. He's currently looking for his next full-time role! I'm scrolling to the Contact section.",
        navigation: Some(NavigationTarget::Contact),
    },
    IntentRule {
        name: "education",
        keywords: &["education", "study", "degree"],
        reply: "Paras has:\n• Information & Communication Technology (ICT)\n• Diploma in Mechanical Engineering\n\nHe brings together hands-on engineering experience with strong IT skills to build practical, tech-driven solutions.",
        navigation: None,
    },
    IntentRule {
        name: "location",
        keywords: &["location", "where"],
        reply: "Paras is based in Eindhoven, Netherlands. He's open to opportunities in the Netherlands.",
        navigation: None,
    },
    // Shadowed by "education" for every shared keyword; only "university"
    // and "college" inputs that miss all earlier rules land here.
    IntentRule {
        name: "education_detail",
        keywords: &["education", "study", "degree", "university", "college"],
        reply: "Paras studied both Information & Communication Technology (2025) at Fontys University of Applied Sciences and Mechanical Engineering (2020) at Govt. Polytechnic College. This combination of fields highlights his adaptability, ability to learn across disciplines, and enthusiasm for tackling new challenges.",
        navigation: Some(NavigationTarget::Education),
    },
    IntentRule {
        name: "greeting",
        keywords: &["hello", "hi", "hey"],
        reply: "Hello! I'm here to help you learn more about Paras Khosla. You can ask me about his experience, skills, projects, or how to contact him. What would you like to know?",
        navigation: None,
    },
    IntentRule {
        name: "farewell",
        keywords: &[
            "bye",
            "goodbye",
            "see you",
            "take care",
            "doei",
            "doi",
            "later",
            "good night",
        ],
        reply: "Goodbye! Feel free to explore the site more, and reach out anytime if you have questions. 👋",
        navigation: None,
    },
    IntentRule {
        name: "help",
        keywords: &["help", "what can you do"],
        reply: "I can help you with:\n• Learn about Paras's background and experience\n• Navigate to different sections (About, Experience, Projects, etc.)\n• Get his contact information\n• Learn about his skills and certifications\n\nJust ask me anything about Paras or the website!",
        navigation: None,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Responder {
    rules: &'static [IntentRule],
    fallback: &'static str,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(INTENT_RULES, FALLBACK_REPLY)
    }
}

impl Responder {
    pub const fn new(rules: &'static [IntentRule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &'static [IntentRule] {
        self.rules
    }

    /// Total over its input: unmatched text gets the fallback reply.
    /// Callers are expected to filter out blank input beforehand.
    pub fn respond(&self, input: &str) -> Reply {
        let normalized = input.to_lowercase();

        match self.rules.iter().find(|rule| rule.matches(&normalized)) {
            Some(rule) => Reply {
                text: rule.reply,
                navigation: rule.navigation,
                rule: Some(rule.name),
            },
            None => Reply {
                text: self.fallback,
                navigation: None,
                rule: None,
            },
        }
    }
}

/// Respond with the built-in rule table.
pub fn respond(input: &str) -> Reply {
    Responder::default().respond(input)
}

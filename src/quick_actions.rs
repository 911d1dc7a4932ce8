//! Canned prompts offered next to the chat

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub id: &'static str,
    pub label: &'static str,
    pub prompt: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        id: "validate-ideas",
        label: "Validate Ideas",
        prompt: "Help me validate my startup idea. What are the key steps I should take to ensure product-market fit?",
    },
    QuickAction {
        id: "growth-strategy",
        label: "Growth Strategy",
        prompt: "What are the most effective growth strategies for an early-stage startup with limited resources?",
    },
    QuickAction {
        id: "find-cofounders",
        label: "Find Co-founders",
        prompt: "What should I look for in a potential co-founder? How can I find and evaluate potential co-founders?",
    },
    QuickAction {
        id: "fundraising-tips",
        label: "Fundraising Tips",
        prompt: "What are the key elements of a successful fundraising strategy for a pre-seed startup?",
    },
];

pub fn find(id: &str) -> Option<&'static QuickAction> {
    QUICK_ACTIONS.iter().find(|action| action.id == id)
}

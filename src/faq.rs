//! FAQ content and the category filter behind the chip row.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

pub const CATEGORIES: [&str; 5] = ["all", "product", "usage", "safety", "results"];

pub const ENTRIES: [FaqEntry; 6] = [
    FaqEntry {
        question: "How many nicotine doses are in one bottle of SigRid?",
        answer: "Each bottle contains 400 metered doses, each dose delivering 0.5mg of \
                 nicotine, making it a long-lasting solution for your quitting journey.",
        category: "product",
    },
    FaqEntry {
        question: "Is SigRid considered safe to use as a quitting aid?",
        answer: "SigRid has been clinically tested and is safe for adults when used as \
                 directed. As with any nicotine replacement therapy, it's not recommended \
                 for pregnant women, people with certain cardiovascular conditions, or \
                 those under 18. Always consult with your healthcare provider before \
                 starting any smoking cessation program.",
        category: "safety",
    },
    FaqEntry {
        question: "What is the recommended duration to use SigRid?",
        answer: "The recommended treatment period is 12 weeks, with a gradual reduction \
                 in usage over time. Most users start seeing a significant reduction in \
                 cravings within the first week and can be completely smoke-free within \
                 4-8 weeks. Your individual journey may vary based on your smoking \
                 history and personal factors.",
        category: "usage",
    },
    FaqEntry {
        question: "Can I combine SigRid with other nicotine therapies?",
        answer: "It's generally not recommended to use multiple nicotine replacement \
                 therapies simultaneously unless specifically advised by your healthcare \
                 provider. SigRid is designed to be effective on its own, but your doctor \
                 may recommend a combination approach in certain cases.",
        category: "usage",
    },
    FaqEntry {
        question: "What are the possible side effects of using SigRid?",
        answer: "Some users may experience mild nasal irritation, sneezing, watery eyes, \
                 or throat irritation when first using SigRid. These effects typically \
                 subside as your body adjusts to the product. If you experience severe or \
                 persistent side effects, discontinue use and consult with your \
                 healthcare provider.",
        category: "safety",
    },
    FaqEntry {
        question: "How fast can I expect to see results with SigRid?",
        answer: "Most users report a significant reduction in cravings within minutes of \
                 using SigRid, which is much faster than other nicotine replacement \
                 therapies. The overall success of your quit attempt depends on \
                 consistent use and combining SigRid with behavioral strategies for \
                 quitting.",
        category: "results",
    },
];

/// `"all"` keeps every entry in original order; anything else keeps exactly
/// the entries of that category.
pub fn filtered(category: &str) -> Vec<&'static FaqEntry> {
    ENTRIES
        .iter()
        .filter(|entry| category == "all" || entry.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_preserves_every_entry_in_order() {
        let entries = filtered("all");
        assert_eq!(entries.len(), ENTRIES.len());
        for (kept, original) in entries.iter().zip(ENTRIES.iter()) {
            assert_eq!(kept.question, original.question);
        }
    }

    #[test]
    fn category_filter_keeps_only_matching_entries() {
        let safety = filtered("safety");
        assert_eq!(safety.len(), 2);
        assert!(safety.iter().all(|entry| entry.category == "safety"));
    }

    #[test]
    fn unknown_category_yields_nothing() {
        assert!(filtered("shipping").is_empty());
    }
}

use serde::Serialize;

use crate::model::Score;
use crate::model::ids::QuestionId;

//
// ─── CATEGORY ─────────────────────────────────────────────────────────────────
//

/// A named group of statements, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    items: Vec<String>,
}

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single statement with its stable identifier and owning category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: String,
    pub text: String,
}

//
// ─── CATALOG ──────────────────────────────────────────────────────────────────
//

/// Immutable, ordered set of categories and their flattened questions.
///
/// Ids are assigned from 1-based positions, so they are unique by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    questions: Vec<Question>,
}

impl Catalog {
    /// Build a catalog from ordered categories.
    ///
    /// Positions past `u16::MAX` are not addressable and are dropped.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        let mut questions = Vec::new();
        for (ci, category) in categories.iter().enumerate() {
            let Ok(category_pos) = u16::try_from(ci + 1) else {
                break;
            };
            for (qi, text) in category.items.iter().enumerate() {
                let Ok(item_pos) = u16::try_from(qi + 1) else {
                    break;
                };
                let Ok(id) = QuestionId::new(category_pos, item_pos) else {
                    continue;
                };
                questions.push(Question {
                    id,
                    category: category.name.clone(),
                    text: text.clone(),
                });
            }
        }
        Self {
            categories,
            questions,
        }
    }

    /// The built-in reference catalog: 11 categories, 44 statements.
    #[must_use]
    pub fn reference() -> Self {
        let categories = REFERENCE_CATEGORIES
            .iter()
            .map(|(name, items)| {
                Category::new(*name, items.iter().map(|s| (*s).to_string()).collect())
            })
            .collect();
        Self::new(categories)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions belonging to the category at the given 1-based position.
    pub fn questions_in(&self, category: u16) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.id.category() == category)
    }

    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: QuestionId) -> bool {
        self.question(id).is_some()
    }

    /// `TOTAL`: number of questions across all categories.
    #[must_use]
    pub fn total(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.total().saturating_mul(Score::MAX)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}

const REFERENCE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "A. Leadership & Authority",
        &[
            "The leader is always right and cannot be questioned.",
            "Disagreeing with the leader is treated as rebelling against God (or truth).",
            "The leader demands personal recognition in speeches, prayers, or rituals.",
            "The leader controls access to sacred space, rituals, or knowledge.",
            "The leader surrounds themselves with unquestioning followers ('yes-men').",
        ],
    ),
    (
        "B. Information & Teaching",
        &[
            "Members are discouraged from reading or listening to outside viewpoints.",
            "Critical media, books, or websites about the group are forbidden or demonized.",
            "Scripture or doctrine is reinterpreted to always support the leader.",
            "History is rewritten to show the leader/group was always correct.",
            "Dissenters are labeled as traitors, evil, or deceived.",
        ],
    ),
    (
        "C. Community & Relationships",
        &[
            "Members are pressured to cut off relationships with outsiders (family/friends).",
            "Loyalty to the group is valued more than loyalty to truth or justice.",
            "When a member is punished, others stay silent out of fear.",
            "Members are encouraged to report on each other’s behavior or doubts.",
            "People who leave are shunned, slandered, or spiritually condemned.",
        ],
    ),
    (
        "D. Emotional & Psychological Control",
        &[
            "Members must apologize for things they did not do, to please leadership.",
            "Guilt, shame, or fear are used to keep members in line.",
            "Members feel God’s love and forgiveness are only available through the group.",
            "“Love bombing” (excessive praise) is given to new or favored members, then withdrawn as punishment.",
            "Leaders portray themselves as victims if challenged.",
        ],
    ),
    (
        "E. Behavior & Finances",
        &[
            "Members are told how to dress, eat, or manage family decisions.",
            "Attendance at meetings/events is expected regardless of personal cost.",
            "Members are pressured to give financially beyond their means.",
            "Finances are not transparent; money is controlled by leadership.",
            "Members’ time, energy, and resources are expected to serve the group first.",
        ],
    ),
    (
        "F. Spiritual Claims",
        &[
            "The leader is treated as God’s unique representative on earth.",
            "Members are told salvation, enlightenment, or blessing exists only inside the group.",
            "Disagreement is equated with sin, evil spirits, or demonic influence.",
            "Outsiders are portrayed as enemies who want to destroy the truth.",
            "The group claims to be the only true way, church, or chosen people.",
        ],
    ),
    (
        "G. Sexual & Family Control",
        &[
            "Relationships or marriages are arranged, approved, or broken up by leadership.",
            "Sexuality is tightly controlled (forbidden, shamed, or exploited).",
            "Children are raised primarily for the group’s benefit rather than their family’s.",
        ],
    ),
    (
        "H. Isolation & Time Control",
        &[
            "Members have little free time outside of group activities.",
            "Vacations, hobbies, or personal downtime are discouraged.",
            "Members live communally or relocate to be closer to the group.",
        ],
    ),
    (
        "I. End-Times or Doomsday Thinking",
        &[
            "The group strongly emphasizes apocalyptic events or urgent end-times prophecy.",
            "The group claims only its members will survive or be saved.",
        ],
    ),
    (
        "J. Recruitment & Retention",
        &[
            "New members are 'love-bombed' (excessive welcome, praise, gifts).",
            "Commitments of time, money, or loyalty are escalated gradually.",
            "Outsiders are demonized to make leaving feel terrifying.",
        ],
    ),
    (
        "K. Psychological Red Flags",
        &[
            "Members feel guilty or afraid if they think about leaving.",
            "Doubt is reframed as spiritual failure rather than normal questioning.",
            "Members feel like they are 'walking on eggshells' around leadership.",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn reference_catalog_has_44_questions_in_11_categories() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.categories().len(), 11);
        assert_eq!(catalog.total(), 44);
        assert_eq!(catalog.max_score(), 220);

        let sizes: Vec<usize> = catalog.categories().iter().map(|c| c.items().len()).collect();
        assert_eq!(sizes, vec![5, 5, 5, 5, 5, 5, 3, 3, 2, 3, 3]);

        let per_category: u32 = catalog
            .categories()
            .iter()
            .map(|c| u32::try_from(c.items().len()).unwrap())
            .sum();
        assert_eq!(per_category, catalog.total());
    }

    #[test]
    fn ids_are_unique_and_in_catalog_order() {
        let catalog = Catalog::reference();
        let ids: Vec<QuestionId> = catalog.questions().iter().map(|q| q.id).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());

        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(sorted, ids);

        assert_eq!(ids.first().unwrap().to_string(), "1-1");
        assert_eq!(ids.last().unwrap().to_string(), "11-3");
    }

    #[test]
    fn flattening_keeps_category_names() {
        let catalog = Catalog::new(vec![
            Category::new("First", vec!["a".into(), "b".into()]),
            Category::new("Second", vec!["c".into()]),
        ]);
        let q = catalog.question("2-1".parse().unwrap()).unwrap();
        assert_eq!(q.category, "Second");
        assert_eq!(q.text, "c");
        assert_eq!(catalog.questions_in(1).count(), 2);
        assert!(!catalog.contains("2-2".parse().unwrap()));
    }

    #[test]
    fn empty_catalog_has_zero_max() {
        let catalog = Catalog::new(Vec::new());
        assert_eq!(catalog.total(), 0);
        assert_eq!(catalog.max_score(), 0);
    }
}

use checklist_core::model::{AnswerMap, Catalog, QuestionId, Score};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaleOptionVm {
    pub value: u8,
    pub label: &'static str,
    pub checked: bool,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub id_str: String,
    pub text: String,
    pub options: Vec<ScaleOptionVm>,
}

impl QuestionVm {
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.options.iter().any(|o| o.checked)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryVm {
    pub name: String,
    pub questions: Vec<QuestionVm>,
}

fn scale_options(selected: Option<Score>) -> Vec<ScaleOptionVm> {
    Score::ALL
        .iter()
        .map(|score| {
            let checked = selected == Some(*score);
            ScaleOptionVm {
                value: score.value(),
                label: score.label(),
                checked,
                class: if checked {
                    "scale-option scale-option--selected"
                } else {
                    "scale-option"
                },
            }
        })
        .collect()
}

/// One section per catalog category, each question carrying its five options.
#[must_use]
pub fn map_checklist(catalog: &Catalog, answers: &AnswerMap) -> Vec<CategoryVm> {
    catalog
        .categories()
        .iter()
        .zip(1_u16..)
        .map(|(category, position)| CategoryVm {
            name: category.name().to_string(),
            questions: catalog
                .questions_in(position)
                .map(|q| QuestionVm {
                    id: q.id,
                    id_str: q.id.to_string(),
                    text: q.text.clone(),
                    options: scale_options(answers.get(q.id)),
                })
                .collect(),
        })
        .collect()
}

use portfolio_core::model::ProjectCard;

/// Render-ready project card with stable keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCardVm {
    pub key: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub tech: Vec<String>,
}

#[must_use]
pub fn map_project_cards(cards: &[ProjectCard]) -> Vec<ProjectCardVm> {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| ProjectCardVm {
            key: format!("{index}-{}", card.title()),
            title: card.title().to_owned(),
            description: card.description().to_owned(),
            image_url: card.image_url().to_owned(),
            tech: card.tech().to_vec(),
        })
        .collect()
}

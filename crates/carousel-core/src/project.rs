use crate::registry::ImageDescriptor;

/// One gallery entry: the image plus the text shown beside it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
        }
    }

    pub fn descriptor(&self) -> ImageDescriptor {
        ImageDescriptor::new(self.image_url.clone())
    }
}

pub fn descriptors(projects: &[Project]) -> Vec<ImageDescriptor> {
    projects.iter().map(Project::descriptor).collect()
}

/// Description text as rows of words: split on newlines, then on spaces.
pub fn description_lines(text: &str) -> Vec<Vec<&str>> {
    text.split('\n')
        .map(|row| row.split(' ').filter(|w| !w.is_empty()).collect())
        .collect()
}

/// One-based position label shown in the counter.
pub fn counter_label(index: usize) -> String {
    (index + 1).to_string()
}

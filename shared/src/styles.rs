use enum_iterator::Sequence;
use strum::Display;

/// Prefix the about stylesheet scopes its rules under.
pub const ABOUT_MODULE: &str = "about";

/// Class roles the about page applies to its elements.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Sequence, Display)]
#[strum(serialize_all = "camelCase")]
pub enum AboutClass {
    Title,
    Content,
    Subtitle,
    Text,
    TextItem,
    AdditionalTitle,
    TextLink,
}

impl AboutClass {
    pub fn scoped(self) -> String {
        format!("{}_{}", ABOUT_MODULE, self)
    }
}

/// Resolved class names, one field per role, for use in templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutClasses {
    pub title: String,
    pub content: String,
    pub subtitle: String,
    pub text: String,
    pub text_item: String,
    pub additional_title: String,
    pub text_link: String,
}

impl AboutClasses {
    pub fn resolve() -> Self {
        AboutClasses {
            title: AboutClass::Title.scoped(),
            content: AboutClass::Content.scoped(),
            subtitle: AboutClass::Subtitle.scoped(),
            text: AboutClass::Text.scoped(),
            text_item: AboutClass::TextItem.scoped(),
            additional_title: AboutClass::AdditionalTitle.scoped(),
            text_link: AboutClass::TextLink.scoped(),
        }
    }
}

use crate::ServerError;
use askama::Template;
use axum::{extract::Query, response::Html};
use shared::{
    about::{AboutPage, AboutProps},
    styles::AboutClasses,
    PageMeta,
};

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    meta: PageMeta,
    page: AboutPage,
    styles: AboutClasses,
    about_css: &'static str,
}

const ABOUT_CSS: &str = include_str!("../styles/about.css");

impl AboutTemplate {
    pub fn new(props: &AboutProps) -> Self {
        let page = AboutPage::new(props);

        AboutTemplate {
            meta: page.meta,
            page,
            styles: AboutClasses::resolve(),
            about_css: ABOUT_CSS,
        }
    }
}

// A query string that fails to parse is treated like no query at all.
pub async fn get_about(props: Option<Query<AboutProps>>) -> Result<Html<String>, ServerError> {
    let props = props.map(|Query(props)| props).unwrap_or_default();

    Ok(Html(AboutTemplate::new(&props).render()?))
}

use serde::Deserialize;

use crate::{ExternalLink, PageMeta};

pub const ABOUT_META: PageMeta = PageMeta {
    title: "О проекте",
    description: "Фудграм - О проекте",
    og_title: "О проекте",
};

pub const GREETING: &str = "Привет!";
pub const SECTION_TITLE: &str = "Что это за сайт?";
pub const LINKS_TITLE: &str = "Ссылки";

pub const REPOSITORY_URL: &str = "https://github.com/arteick/foodgram";
pub const AUTHOR_URL: &str = "https://github.com/arteick";

static PARAGRAPHS: [&str; 4] = [
    "Представляю вам проект, созданный во время обучения в Яндекс Практикуме. \
     Этот проект — часть учебного курса, в нём необходимо было реализовать API для сервиса Foodgram.",
    "Цель проекта — создать онлайн-платформу для обмена рецептами. \
     Вот некоторые возможности проекта: можно скачать список продуктов, необходимых для \
     приготовления блюда, просмотреть рецепты друзей и добавить любимые рецепты в список избранных, \
     подписаться на любимых авторов и тд.",
    "Чтобы использовать все возможности сайта — нужна регистрация. \
     Проверка адреса электронной почты не осуществляется, вы можете ввести любой email.",
    "Заходите и делитесь своими любимыми рецептами!",
];

static LINKS: [ExternalLink; 2] = [
    ExternalLink {
        caption: "Код проекта находится тут - ",
        label: "Github",
        href: REPOSITORY_URL,
    },
    ExternalLink {
        caption: "Автор проекта: ",
        label: "Артём Козлов",
        href: AUTHOR_URL,
    },
];

/// Options the page is mounted with. Both are passed down by the hosting
/// layout along with every other page and are never read here.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutProps {
    pub orders: Option<u32>,
    pub update_orders: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutPage {
    pub meta: PageMeta,
    pub greeting: &'static str,
    pub section_title: &'static str,
    pub paragraphs: &'static [&'static str],
    pub links_title: &'static str,
    pub links: &'static [ExternalLink],
}

impl AboutPage {
    pub fn new(_props: &AboutProps) -> Self {
        AboutPage {
            meta: ABOUT_META,
            greeting: GREETING,
            section_title: SECTION_TITLE,
            paragraphs: &PARAGRAPHS,
            links_title: LINKS_TITLE,
            links: &LINKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_page() -> AboutPage {
        AboutPage::new(&AboutProps::default())
    }

    #[test]
    fn props_do_not_change_the_page() {
        let with_props = AboutPage::new(&AboutProps {
            orders: Some(12),
            update_orders: Some("refresh".to_owned()),
        });
        let empty_orders = AboutPage::new(&AboutProps {
            orders: Some(0),
            update_orders: None,
        });

        assert_eq!(with_props, default_page());
        assert_eq!(empty_orders, default_page());
    }

    #[test]
    fn metadata_is_fixed() {
        let page = default_page();

        assert_eq!(page.meta.title, "О проекте");
        assert_eq!(page.meta.og_title, "О проекте");
        assert_eq!(page.meta.description, "Фудграм - О проекте");
    }

    #[test]
    fn content_shape() {
        let page = default_page();

        assert_eq!(page.greeting, "Привет!");
        assert_eq!(page.paragraphs.len(), 4);
        assert!(page.paragraphs.iter().all(|p| !p.contains("  ")));
        assert_eq!(
            page.links.iter().map(|link| link.href).collect::<Vec<_>>(),
            vec![REPOSITORY_URL, AUTHOR_URL]
        );
    }
}

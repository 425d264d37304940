use maud::{html, Markup, PreEscaped};

use crate::db::{Article, ArticleSummary};
use crate::{names, utils};

pub fn article_list(articles: &[ArticleSummary]) -> Markup {
    html! {
        h1 { "Articles" }
        @for article in articles {
            article {
                h3 {
                    a href=(names::article_url(&article.slug)) { (article.title) }
                }
                p { small { (utils::format_date(&article.published_at)) } }
                p { (article.summary) }
            }
        }
    }
}

pub fn article_page(article: &Article) -> Markup {
    html! {
        article.article-body {
            h1 { (article.title) }
            p { small { (utils::format_date(&article.published_at)) } }
            // Bodies are authored in-house and stored as HTML.
            (PreEscaped(&article.body_html))
        }
        p {
            a href=(names::ARTICLES_URL) { "All articles" }
        }
    }
}

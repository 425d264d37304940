use maud::{html, Markup};

use crate::db::{ArticleSummary, QuizSummary};
use crate::views::newsletter as newsletter_views;
use crate::{names, utils};

pub fn landing_page(quizzes: &[QuizSummary], articles: &[ArticleSummary]) -> Markup {
    html! {
        // Hero section
        section.landing-hero {
            h1 { "Know yourself a little better" }
            p.landing-hero-desc {
                "Short, research-informed self-assessments with honest results, "
                "scored the moment you finish. No accounts, no dashboards."
            }
            div.landing-cta {
                a role="button" href=(names::QUIZZES_URL) { "Browse assessments" }
                a role="button" href=(names::ARTICLES_URL) class="outline" { "Read the articles" }
            }
        }

        // Featured assessments
        section.landing-quizzes {
            h2 { "Assessments" }
            div."quiz-grid" {
                @for quiz in quizzes {
                    article."quiz-card" {
                        h3 {
                            a href=(names::quiz_page_url(&quiz.slug)) { (quiz.title) }
                        }
                        p { (quiz.question_count) " questions" }
                    }
                }
            }
        }

        // Recent writing
        section.landing-articles {
            h2 { "Recent writing" }
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

        (newsletter_views::subscribe_box(None))
    }
}

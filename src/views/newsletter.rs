use maud::{html, Markup};

use crate::names;

/// Inline subscribe form, embedded on the landing and results pages.
pub fn subscribe_box(error: Option<&str>) -> Markup {
    html! {
        section.newsletter-box {
            h2 { "The Selfsight letter" }
            p {
                "One short reflection prompt a week, and nothing else. "
                "Every issue carries a one-click unsubscribe link."
            }
            article style="width: fit-content;" {
                form action=(names::SUBSCRIBE_URL) method="post" {
                    label {
                        "Email"
                        @if let Some(msg) = error {
                            input name="email"
                                  type="email"
                                  autocomplete="email"
                                  required="true"
                                  placeholder="you@example.com"
                                  aria-invalid="true"
                                  aria-label="Email";
                            small { (msg) }
                        } @else {
                            input name="email"
                                  type="email"
                                  autocomplete="email"
                                  required="true"
                                  placeholder="you@example.com"
                                  aria-label="Email";
                        }
                    }
                    button type="submit" { "Subscribe" }
                }
            }
        }
    }
}

pub fn check_inbox(email: &str) -> Markup {
    html! {
        h1 { "Check your email" }
        p { "We sent a confirmation link to:" }
        p { strong { (email) } }
        p {
            "Click it within seven days to start receiving the letter. "
            "If it does not arrive, check your spam folder and subscribe again."
        }
        p {
            a href="/" { "Back to the homepage" }
        }
    }
}

pub fn already_subscribed() -> Markup {
    html! {
        h1 { "You are already on the list" }
        p { "That address has an active subscription, so there is nothing more to do." }
        p {
            a href=(names::QUIZZES_URL) { "Take an assessment while you are here" }
        }
    }
}

pub fn subscription_active() -> Markup {
    html! {
        h1 { "You are subscribed" }
        p { "Your address was added to the list. The next letter will land in your inbox." }
        p {
            a href=(names::QUIZZES_URL) { "Take an assessment while you wait" }
        }
    }
}

pub fn delivery_failed() -> Markup {
    html! {
        h1 { "We could not reach that inbox" }
        p {
            "Your address was recorded, but the confirmation email failed to send. "
            "Please try again in a few minutes."
        }
        (subscribe_box(None))
    }
}

pub fn confirmed(email: &str) -> Markup {
    html! {
        h1 { "Subscription confirmed" }
        p { "Welcome aboard. The letter will reach you at:" }
        p { strong { (email) } }
        p {
            a href=(names::QUIZZES_URL) { "Browse the assessments" }
        }
    }
}

pub fn unsubscribed(email: &str) -> Markup {
    html! {
        h1 { "You have been unsubscribed" }
        p { (email) " will receive no further letters." }
        p { "Changed your mind? You can subscribe again below." }
        (subscribe_box(None))
    }
}

/// Shown when a confirm or unsubscribe link fails verification. The
/// reason string comes straight from token verification.
pub fn invalid_link(reason: &str) -> Markup {
    html! {
        h1 { "That link did not work" }
        p { (reason) "." }
        p {
            "Links in our emails expire after a while. Subscribing again will "
            "send you a fresh one."
        }
        (subscribe_box(None))
    }
}

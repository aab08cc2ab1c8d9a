use maud::{Markup, Render, html};
use std::{borrow::Cow, time::Duration};

/// How long a notice stays up before it asks to be cleared.
pub const NOTICE_DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub message: Cow<'static, str>,
    pub severity: Severity,
}

impl Notice {
    pub const fn success(message: &'static str) -> Self {
        Self {
            message: Cow::Borrowed(message),
            severity: Severity::Success,
        }
    }

    pub fn error(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// The same notice, swapped into `#notice` alongside some other response.
    pub fn out_of_band(&self) -> Markup {
        self.render_with(true)
    }

    fn render_with(&self, oob: bool) -> Markup {
        let colours = match self.severity {
            Severity::Success => "bg-green-100 border-green-400 text-green-800",
            Severity::Error => "bg-red-100 border-red-400 text-red-700",
        };
        let trigger = format!("load delay:{}s", NOTICE_DISMISS_AFTER.as_secs());

        html! {
            div id="notice" hx-swap-oob=[oob.then_some("true")] {
                div class={"border px-4 py-3 rounded mb-4 " (colours)} role="alert" hx-get="/internal/notice/clear" hx-trigger=(trigger) hx-target="#notice" hx-swap="outerHTML" {
                    (self.message.as_ref())
                }
            }
        }
    }
}

impl Render for Notice {
    fn render(&self) -> Markup {
        self.render_with(false)
    }
}

pub fn empty_notice() -> Markup {
    html! {
        div id="notice" {}
    }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn subtitle(s: impl Render) -> Markup {
    html! {
        h2 class="text-xl font-semibold mb-2" {(s)}
    }
}

pub fn form_element(id: &'static str, human_name: &'static str, element: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(human_name)}
            (element)
        }
    }
}

pub fn simple_form_element(
    id: &'static str,
    human_name: &'static str,
    input_type: &'static str,
    value: Option<&str>,
    readonly: bool,
) -> Markup {
    form_element(
        id,
        human_name,
        html! {
            input type=(input_type) id=(id) name=(id) value=[value] readonly[readonly] step=[(input_type == "number").then_some("0.01")] class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}
        },
    )
}

pub fn stat(label: &'static str, value: impl Render) -> Markup {
    html! {
        div class="rounded-lg shadow-md p-4 text-center bg-gray-700" {
            p class="text-sm text-gray-400" {(label)}
            p class="text-2xl font-semibold" {(value)}
        }
    }
}

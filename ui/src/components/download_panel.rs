use dioxus::prelude::*;

use crate::components::icons;
use crate::t;

const APP_LOGO: Asset = asset!("/assets/logo.svg");

/// Static panel advertising the companion mobile application. Pure chrome;
/// no effect on the data pipeline.
#[component]
pub fn DownloadPanel() -> Element {
    rsx! {
        section { class: "download-panel",
            div { class: "download-panel__intro",
                img {
                    class: "download-panel__logo",
                    src: APP_LOGO,
                    alt: "",
                }
                div {
                    h3 { {t!("download-title")} }
                    p { {t!("download-text")} }
                }
            }
            a {
                class: "download-panel__cta",
                href: "/app-release.apk",
                download: "Affluence.apk",
                span {
                    class: "download-panel__cta-icon",
                    aria_hidden: "true",
                    dangerous_inner_html: icons::DOWNLOAD,
                }
                {t!("download-cta")}
            }
        }
    }
}

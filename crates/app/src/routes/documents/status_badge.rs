use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleCheck, LdCircleX};
use dioxus_free_icons::Icon;
use shared_types::DocumentStatus;

/// Signing-status badge with its polarity glyph: a check circle for
/// Completed, an x circle for Pending.
#[component]
pub fn StatusBadge(status: DocumentStatus) -> Element {
    match status {
        DocumentStatus::Completed => rsx! {
            shared_ui::Badge { variant: shared_ui::BadgeVariant::Primary,
                Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 14, height: 14 }
                "Completed"
            }
        },
        DocumentStatus::Pending => rsx! {
            shared_ui::Badge { variant: shared_ui::BadgeVariant::Outline,
                Icon::<LdCircleX> { icon: LdCircleX, width: 14, height: 14 }
                "Pending"
            }
        },
    }
}

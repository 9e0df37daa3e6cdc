//! Pulsing placeholders for content that is still loading.

use leptos::prelude::*;

/// Number of placeholder cards in [`LoadingSkeleton`].
const SKELETON_CARDS: usize = 6;

#[component]
pub fn Skeleton(#[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() { "skeleton".to_owned() } else { format!("skeleton {class}") };
    view! { <div class=class></div> }
}

/// Grid of card-shaped skeletons.
#[component]
pub fn LoadingSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton-grid">
            {(0..SKELETON_CARDS)
                .map(|_| {
                    view! {
                        <div class="skeleton-card">
                            <Skeleton class="skeleton--media" />
                            <Skeleton class="skeleton--title" />
                            <Skeleton class="skeleton--line" />
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

use crate::api::storefront_api;
use crate::components::icons::CategoryGlyph;
use crate::web::LocalStorage;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use printstrokes::shared::CategoryCard;
use printstrokes::{CategoryView, fetch_categories};

/// 首页分类网格
///
/// 挂载时只发起一次请求；组件卸载后返回的结果直接丢弃。
#[component]
pub fn CategoryGrid() -> impl IntoView {
    let view_state = RwSignal::new(CategoryView::Loading);

    spawn_local(async move {
        let result = fetch_categories(&storefront_api(), &LocalStorage).await;
        // 信号已随组件销毁时 try_update 返回 None
        if view_state.try_update(|view| view.settle(result)).is_none() {
            log::debug!("category grid unmounted before the fetch resolved");
        }
    });

    move || match view_state.get() {
        CategoryView::Loading => view! {
            <section class="py-16 bg-muted/30 text-center">
                <p>"Loading categories..."</p>
            </section>
        }
        .into_any(),
        CategoryView::Failed(message) => view! {
            <section class="py-16 bg-muted/30 text-center text-red-500">
                <p>{message}</p>
            </section>
        }
        .into_any(),
        CategoryView::Loaded(cards) => view! {
            <section class="py-16 bg-muted/30">
                <div class="container mx-auto px-4">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl lg:text-4xl font-heading font-bold mb-4">
                            "Explore Categories"
                        </h2>
                        <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                            "Discover our wide range of personalization options across different product categories"
                        </p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {cards
                            .into_iter()
                            .map(|card| view! { <CategoryTile card=card /> })
                            .collect_view()}
                    </div>
                </div>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn CategoryTile(card: CategoryCard) -> impl IntoView {
    let badge = format!(
        "w-16 h-16 rounded-2xl bg-gradient-to-br {} flex items-center justify-center mb-4 group-hover:scale-110 transition-transform duration-300",
        card.color
    );

    view! {
        <Link to=card.href class="group card-elegant hover:shadow-brand transition-all duration-300">
            <div class=badge>
                <CategoryGlyph icon=card.icon class="h-8 w-8 text-foreground/80" />
            </div>

            <h3 class="font-heading font-semibold text-xl mb-2 group-hover:text-primary transition-colors">
                {card.name}
            </h3>

            <p class="text-muted-foreground mb-3">{card.description}</p>

            <div class="flex items-center justify-between">
                <span class="text-sm font-medium text-primary">{card.count}</span>
                <span class="text-sm text-muted-foreground group-hover:text-primary transition-colors">
                    "Explore →"
                </span>
            </div>
        </Link>
    }
}

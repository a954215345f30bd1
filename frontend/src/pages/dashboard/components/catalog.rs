use crate::{api::CatalogEntry, utils::format::format_currency};
use leptos::*;

#[component]
pub fn CatalogGrid(catalog: Signal<Vec<CatalogEntry>>, on_add: Callback<CatalogEntry>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 gap-3 sm:grid-cols-3">
            {move || {
                catalog
                    .get()
                    .into_iter()
                    .map(|entry| {
                        let price = format!("{}/mo", format_currency(entry.suggested_price));
                        let name = entry.name.clone();
                        let logo = entry.logo.clone();
                        view! {
                            <button
                                class="catalog-item flex flex-col items-center rounded-lg border border-gray-200 p-3 hover:border-orange-500"
                                on:click=move |_| on_add.call(entry.clone())
                            >
                                <span class="text-2xl">{logo}</span>
                                <span class="mt-1 text-sm font-medium text-gray-900">{name}</span>
                                <span class="text-xs text-gray-500">{price}</span>
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn grid_lists_entries_with_monthly_price() {
        let html = render_to_string(move || {
            let entries = vec![
                CatalogEntry {
                    name: "Netflix".into(),
                    logo: "🎬".into(),
                    suggested_price: 15.99,
                    category: Some("streaming".into()),
                },
                CatalogEntry {
                    name: "Spotify".into(),
                    logo: "🎵".into(),
                    suggested_price: 9.99,
                    category: None,
                },
            ];
            view! {
                <CatalogGrid
                    catalog=Signal::derive(move || entries.clone())
                    on_add=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Netflix"));
        assert!(html.contains("$15.99/mo"));
        assert!(html.contains("Spotify"));
        assert!(html.contains("$9.99/mo"));
    }

    #[test]
    fn entries_sharing_a_name_both_render() {
        let html = render_to_string(move || {
            let entries = vec![
                CatalogEntry {
                    name: "YouTube Premium".into(),
                    logo: "▶".into(),
                    suggested_price: 13.99,
                    category: None,
                },
                CatalogEntry {
                    name: "YouTube Premium".into(),
                    logo: "▶".into(),
                    suggested_price: 22.99,
                    category: Some("family".into()),
                },
            ];
            view! {
                <CatalogGrid
                    catalog=Signal::derive(move || entries.clone())
                    on_add=Callback::new(|_| {})
                />
            }
        });
        assert_eq!(html.matches("catalog-item").count(), 2);
        assert!(html.contains("$13.99/mo"));
        assert!(html.contains("$22.99/mo"));
    }
}

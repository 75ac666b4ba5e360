//! # Screen Rendering
//!
//! Builds the view model the host paints. The host never reads state
//! directly; after every command it asks for a fresh [`Screen`].
//!
//! ## Screen Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  banner (toast, when visible)                                           │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  header: title        [cart (n)] [admin]      ◄── store view            │
//! │                       [back to store]          ◄── admin / add product  │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  body: Store { cards } | Admin { stats, rows } | AddProduct { form }    │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  cart drawer (when open)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use flexnesse_core::{
    CartEntry, Category, Color, DraftProduct, ImageData, Product, ProductId, Size, View,
};
use serde::Serialize;

use crate::commands::product::admin_summary;
use crate::state::{AppState, StoreConfig, TextDirection};

const ADD_TO_CART: &str = "إضافة للسلة";
const ADMIN_PANEL: &str = "لوحة التحكم";
const BACK_TO_STORE: &str = "العودة للمتجر";
const ADD_NEW_PRODUCT: &str = "إضافة منتج جديد";
const TOTAL_PRODUCTS: &str = "إجمالي المنتجات";
const TOTAL_SALES: &str = "إجمالي المبيعات";
const CATEGORIES: &str = "الفئات";
const PRODUCT_LIST: &str = "قائمة المنتجات";
const NO_PRODUCTS: &str = "لا توجد منتجات. قم بإضافة منتجات جديدة.";

/// Everything the host needs to paint one frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub direction: TextDirection,
    pub banner: Option<String>,
    pub header: Header,
    pub body: Body,
    pub cart_drawer: Option<CartDrawer>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub title: String,
    pub actions: Vec<HeaderAction>,
}

/// Buttons in the header bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum HeaderAction {
    OpenCart { count: usize },
    GoTo { view: View, label: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum Body {
    Store(StoreView),
    Admin(AdminPanel),
    AddProduct(AddProductForm),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreView {
    pub cards: Vec<ProductCard>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub image: ImageData,
    pub price_label: String,
    pub sizes: Vec<&'static str>,
    pub add_to_cart_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPanel {
    pub heading: &'static str,
    pub add_product: HeaderAction,
    pub stats: Vec<StatCard>,
    pub list_heading: &'static str,
    pub rows: Vec<AdminRow>,
    /// Placeholder text shown instead of rows when the catalog is empty.
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRow {
    pub id: ProductId,
    pub name: String,
    pub image: ImageData,
    pub price_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddProductForm {
    pub heading: &'static str,
    pub draft: DraftProduct,
    pub image_preview: Option<ImageData>,
    pub categories: Vec<Choice<Category>>,
    pub sizes: Vec<Choice<Size>>,
    pub colors: Vec<Choice<Color>>,
}

/// One option of a fixed label set, with whether the draft has it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice<T> {
    pub value: T,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDrawer {
    pub entries: Vec<CartEntry>,
    pub count: usize,
}

/// Renders the current state.
pub fn render(app: &AppState) -> Screen {
    let view = app.view.current();
    let notification = app.notifications.current();
    let (cart_count, cart_drawer) = app.cart.with_cart(|c| {
        let drawer = c.drawer_open.then(|| CartDrawer {
            entries: c.entries.clone(),
            count: c.len(),
        });
        (c.len(), drawer)
    });

    let body = match view {
        View::Store => Body::Store(store_view(app)),
        View::Admin => Body::Admin(admin_panel(app)),
        View::AddProduct => Body::AddProduct(add_product_form(app)),
    };

    Screen {
        direction: app.config.text_direction,
        banner: notification.visible.then_some(notification.message),
        header: header(&app.config, view, cart_count),
        body,
        cart_drawer,
    }
}

fn header(config: &StoreConfig, view: View, cart_count: usize) -> Header {
    let actions = match view {
        View::Store => vec![
            HeaderAction::OpenCart { count: cart_count },
            HeaderAction::GoTo {
                view: View::Admin,
                label: ADMIN_PANEL.to_string(),
            },
        ],
        View::Admin | View::AddProduct => vec![HeaderAction::GoTo {
            view: View::Store,
            label: BACK_TO_STORE.to_string(),
        }],
    };

    Header {
        title: config.store_name.clone(),
        actions,
    }
}

fn store_view(app: &AppState) -> StoreView {
    let cards = app.catalog.with_catalog(|c| {
        c.products()
            .iter()
            .map(|p| ProductCard {
                id: p.id,
                name: p.name.clone(),
                image: p.image.clone(),
                price_label: app.config.format_price(&p.price),
                sizes: p.sizes.iter().map(Size::label).collect(),
                add_to_cart_label: ADD_TO_CART,
            })
            .collect()
    });

    StoreView { cards }
}

fn admin_panel(app: &AppState) -> AdminPanel {
    let summary = admin_summary(app);
    let rows: Vec<AdminRow> = app.catalog.with_catalog(|c| {
        c.products()
            .iter()
            .map(|p: &Product| AdminRow {
                id: p.id,
                name: p.name.clone(),
                image: p.image.clone(),
                price_label: app.config.format_price(&p.price),
            })
            .collect()
    });

    AdminPanel {
        heading: ADMIN_PANEL,
        add_product: HeaderAction::GoTo {
            view: View::AddProduct,
            label: ADD_NEW_PRODUCT.to_string(),
        },
        stats: vec![
            StatCard {
                title: TOTAL_PRODUCTS,
                value: summary.total_products.to_string(),
            },
            StatCard {
                title: TOTAL_SALES,
                value: app.config.format_price(&summary.total_sales.to_string()),
            },
            StatCard {
                title: CATEGORIES,
                value: summary.category_count.to_string(),
            },
        ],
        list_heading: PRODUCT_LIST,
        empty_message: rows.is_empty().then_some(NO_PRODUCTS),
        rows,
    }
}

fn add_product_form(app: &AppState) -> AddProductForm {
    let (draft, image_preview) =
        app.draft.with_draft(|d| (d.product.clone(), d.image_preview.clone()));

    AddProductForm {
        heading: ADD_NEW_PRODUCT,
        categories: Category::ALL
            .iter()
            .map(|&c| Choice {
                value: c,
                label: c.label(),
                selected: draft.category == Some(c),
            })
            .collect(),
        sizes: Size::ALL
            .iter()
            .map(|&s| Choice {
                value: s,
                label: s.label(),
                selected: draft.sizes.contains(&s),
            })
            .collect(),
        colors: Color::ALL
            .iter()
            .map(|&c| Choice {
                value: c,
                label: c.label(),
                selected: draft.colors.contains(&c),
            })
            .collect(),
        draft,
        image_preview,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{app_with, shirt};
    use crate::commands::{cart, draft, view};
    use crate::state::DraftUpdate;

    #[test]
    fn test_store_view_cards() {
        let mut product = shirt(1);
        product.sizes = vec![Size::S, Size::Xl];
        let app = app_with(vec![product]);

        let screen = render(&app);

        let Body::Store(store) = screen.body else {
            panic!("expected store view");
        };
        assert_eq!(store.cards.len(), 1);
        assert_eq!(store.cards[0].price_label, "100 جنيه");
        assert_eq!(store.cards[0].sizes, vec!["S", "XL"]);
        assert_eq!(
            screen.header.actions,
            vec![
                HeaderAction::OpenCart { count: 0 },
                HeaderAction::GoTo {
                    view: View::Admin,
                    label: ADMIN_PANEL.to_string()
                },
            ]
        );
        assert!(screen.banner.is_none());
        assert!(screen.cart_drawer.is_none());
    }

    #[test]
    fn test_admin_panel_empty() {
        let app = AppState::default();
        view::navigate(&app, View::Admin);

        let screen = render(&app);

        let Body::Admin(panel) = screen.body else {
            panic!("expected admin panel");
        };
        assert_eq!(panel.empty_message, Some(NO_PRODUCTS));
        assert!(panel.rows.is_empty());
        let values: Vec<_> = panel.stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["0", "0 جنيه", "5"]);
        assert_eq!(
            screen.header.actions,
            vec![HeaderAction::GoTo {
                view: View::Store,
                label: BACK_TO_STORE.to_string()
            }]
        );
    }

    #[test]
    fn test_admin_panel_rows() {
        let app = app_with(vec![shirt(1), shirt(2)]);
        view::navigate(&app, View::Admin);

        let Body::Admin(panel) = render(&app).body else {
            panic!("expected admin panel");
        };
        assert_eq!(panel.rows.len(), 2);
        assert!(panel.empty_message.is_none());
        assert_eq!(panel.stats[0].value, "2");
    }

    #[test]
    fn test_add_product_form_marks_selection() {
        let app = AppState::default();
        view::navigate(&app, View::AddProduct);
        draft::update_draft(&app, DraftUpdate::Category(Some(Category::Jackets)));
        draft::update_draft(&app, DraftUpdate::ToggleColor(Color::Red));

        let Body::AddProduct(form) = render(&app).body else {
            panic!("expected add product form");
        };
        let selected: Vec<_> = form
            .categories
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.value)
            .collect();
        assert_eq!(selected, vec![Category::Jackets]);
        assert_eq!(form.sizes.len(), 6);
        assert!(form.sizes.iter().all(|s| !s.selected));
        assert!(form.colors.iter().any(|c| c.value == Color::Red && c.selected));
        assert!(form.image_preview.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_banner_and_drawer() {
        let product = shirt(1);
        let app = app_with(vec![product.clone()]);
        cart::add_to_cart(&app, product.id).unwrap();
        cart::open_cart(&app);

        let screen = render(&app);

        assert!(screen.banner.is_some());
        assert_eq!(screen.cart_drawer.map(|d| d.count), Some(1));
        assert_eq!(screen.header.actions[0], HeaderAction::OpenCart { count: 1 });
    }

    #[test]
    fn test_screen_wire_shape() {
        let app = AppState::default();
        let json = serde_json::to_value(render(&app)).unwrap();

        assert_eq!(json["direction"], "rtl");
        assert_eq!(json["body"]["view"], "store");
        assert_eq!(json["header"]["actions"][0]["action"], "openCart");
        assert_eq!(json["banner"], serde_json::Value::Null);
    }
}

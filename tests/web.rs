#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use favorites_sync::dom::{
    document, has_class, install_favorites_delegation, DomFavoritePresenter, ElementControl,
};
use favorites_sync::models::{FavoriteEntry, FavoriteId, NotificationKind, PropertyId};
use favorites_sync::services::{FavoritesGateway, GatewayError, SessionProvider};
use favorites_sync::utils::constants::{
    FAVORITED_CLASS, LOADING_CLASS, PULSE_CLASS, PULSE_DURATION_MS, TITLE_ADD, TITLE_REMOVE,
};
use favorites_sync::views::{FavoritePresenter, Notifier, ToggleControl};
use favorites_sync::FavoritesController;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> Element {
    let doc = document().expect("document");
    let root = doc.create_element("div").expect("div");
    root.set_inner_html(html);
    doc.body().expect("body").append_child(&root).expect("append");
    root
}

#[wasm_bindgen_test]
fn set_state_marks_every_control_for_the_property() {
    let root = mount(
        r#"<button id="a" data-favorite-property="5"></button>
           <button id="b" data-favorite-property="5"></button>
           <button id="c" data-favorite-property="11"></button>"#,
    );
    let presenter = DomFavoritePresenter::new();

    presenter.set_state(5, true);

    let doc = document().unwrap();
    for id in ["a", "b"] {
        let control = doc.get_element_by_id(id).unwrap();
        assert!(has_class(&control, FAVORITED_CLASS));
        assert_eq!(control.get_attribute("title").as_deref(), Some(TITLE_REMOVE));
        assert_eq!(control.get_attribute("aria-pressed").as_deref(), Some("true"));
    }
    let other = doc.get_element_by_id("c").unwrap();
    assert!(!has_class(&other, FAVORITED_CLASS));

    presenter.set_state(5, false);
    let a = doc.get_element_by_id("a").unwrap();
    assert!(!has_class(&a, FAVORITED_CLASS));
    assert_eq!(a.get_attribute("aria-label").as_deref(), Some(TITLE_ADD));

    root.remove();
}

#[wasm_bindgen_test]
fn set_state_without_controls_is_a_noop() {
    DomFavoritePresenter::new().set_state(987_654, true);
}

#[wasm_bindgen_test]
fn controls_on_page_skips_invalid_ids() {
    let root = mount(
        r#"<span data-favorite-property="9"></span>
           <span data-favorite-property="5"></span>
           <span data-favorite-property="9"></span>
           <span data-favorite-property="nope"></span>"#,
    );

    let ids = DomFavoritePresenter::new().controls_on_page();
    assert!(ids.contains(&5));
    assert!(ids.contains(&9));
    assert_eq!(ids.iter().filter(|id| **id == 9).count(), 1);

    root.remove();
}

#[wasm_bindgen_test]
fn set_state_matches_ids_written_with_padding() {
    let root = mount(
        r#"<button id="spaced" data-favorite-property=" 42"></button>
           <button id="zeros" data-favorite-property="042"></button>
           <button id="other" data-favorite-property="420"></button>"#,
    );

    DomFavoritePresenter::new().set_state(42, true);

    let doc = document().unwrap();
    assert!(has_class(&doc.get_element_by_id("spaced").unwrap(), FAVORITED_CLASS));
    assert!(has_class(&doc.get_element_by_id("zeros").unwrap(), FAVORITED_CLASS));
    assert!(!has_class(&doc.get_element_by_id("other").unwrap(), FAVORITED_CLASS));

    root.remove();
}

#[wasm_bindgen_test]
async fn pulse_class_is_removed_after_its_duration() {
    let root = mount(r#"<button id="p" data-favorite-property="43"></button>"#);

    DomFavoritePresenter::new().pulse(43);

    let control = document().unwrap().get_element_by_id("p").unwrap();
    assert!(has_class(&control, PULSE_CLASS));

    TimeoutFuture::new(PULSE_DURATION_MS + 100).await;
    assert!(!has_class(&control, PULSE_CLASS));

    root.remove();
}

#[wasm_bindgen_test]
fn element_control_toggles_disabled() {
    let root = mount(r#"<button id="t" data-favorite-property="1"></button>"#);
    let element = document().unwrap().get_element_by_id("t").unwrap();
    let control = ElementControl::new(element.clone());

    control.set_busy(true);
    assert!(element.has_attribute("disabled"));
    assert!(has_class(&element, LOADING_CLASS));

    control.set_busy(false);
    assert!(!element.has_attribute("disabled"));
    assert!(!has_class(&element, LOADING_CLASS));

    root.remove();
}

// ----------------------------------------------------------------------------
// Delegación
// ----------------------------------------------------------------------------

#[derive(Default)]
struct RecordingGateway {
    creates: RefCell<Vec<(PropertyId, Option<String>)>>,
    deletes: RefCell<Vec<FavoriteId>>,
}

#[async_trait(?Send)]
impl FavoritesGateway for RecordingGateway {
    async fn list_favorites(&self, _token: &str) -> Result<Vec<FavoriteEntry>, GatewayError> {
        Ok(Vec::new())
    }

    async fn create_favorite(
        &self,
        _token: &str,
        property_id: PropertyId,
        notes: Option<&str>,
    ) -> Result<FavoriteId, GatewayError> {
        self.creates.borrow_mut().push((property_id, notes.map(str::to_string)));
        Ok(500 + self.creates.borrow().len() as FavoriteId)
    }

    async fn delete_favorite(&self, _token: &str, favorite_id: FavoriteId) -> Result<(), GatewayError> {
        self.deletes.borrow_mut().push(favorite_id);
        Ok(())
    }
}

struct StaticSession;

impl SessionProvider for StaticSession {
    fn token(&self) -> Option<String> {
        Some("token-web".to_string())
    }

    fn schedule_logout(&self, _delay_ms: u32) {}
}

struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _kind: NotificationKind, _message: &str) {}
}

// El listener es global a la página: todo lo de delegación va en un solo test
#[wasm_bindgen_test]
async fn delegated_click_toggles_once_for_late_controls() {
    let gateway = Rc::new(RecordingGateway::default());
    let controller = FavoritesController::new(
        gateway.clone(),
        Rc::new(StaticSession),
        Rc::new(DomFavoritePresenter::new()),
        Rc::new(SilentNotifier),
        0,
    );

    assert!(install_favorites_delegation(controller.clone()).is_ok());
    assert!(install_favorites_delegation(controller.clone()).is_ok());

    // el control aparece después de registrar el listener
    let root = mount(
        r#"<button id="late" data-favorite-property="77" data-favorite-notes="vista al mar">
             <span id="late-icon">★</span>
           </button>"#,
    );
    let icon: HtmlElement = document()
        .unwrap()
        .get_element_by_id("late-icon")
        .unwrap()
        .dyn_into()
        .unwrap();

    icon.click();
    TimeoutFuture::new(50).await;

    assert_eq!(
        *gateway.creates.borrow(),
        vec![(77, Some("vista al mar".to_string()))]
    );
    assert!(gateway.deletes.borrow().is_empty());
    assert!(controller.is_favorite(77));

    let button = document().unwrap().get_element_by_id("late").unwrap();
    assert!(has_class(&button, FAVORITED_CLASS));
    assert!(!button.has_attribute("disabled"));

    // deshabilitado = petición en vuelo, el click se ignora
    button.set_attribute("disabled", "").unwrap();
    icon.click();
    TimeoutFuture::new(50).await;
    assert!(gateway.deletes.borrow().is_empty());

    root.remove();
}

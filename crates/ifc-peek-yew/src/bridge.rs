//! Bridge between the Yew UI and web-ifc-viewer
//!
//! Binds the parts of `IfcViewerAPI` the application uses and exposes them
//! through the `IfcViewer` trait. The page must load three.js and
//! web-ifc-viewer so that `THREE` and `IfcViewerAPI` are globals before the
//! WASM module starts.

use futures_util::future::{FutureExt, LocalBoxFuture};
use ifc_peek_core::ViewerConfig;
use ifc_peek_model::{
    Clipper, IfcViewer, LoadError, ModelId, PickHit, PropertyBag, Result, ViewerError,
};
use js_sys::{Function, Object, Promise, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{File, HtmlElement};

// JavaScript FFI
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = THREE)]
    type Color;

    #[wasm_bindgen(constructor, js_namespace = THREE)]
    fn new(hex: u32) -> Color;

    #[wasm_bindgen(js_name = IfcViewerAPI)]
    type IfcViewerApi;

    #[wasm_bindgen(constructor, js_class = "IfcViewerAPI", catch)]
    fn new(options: &Object) -> std::result::Result<IfcViewerApi, JsValue>;

    #[wasm_bindgen(method, getter)]
    fn axes(this: &IfcViewerApi) -> Axes;

    #[wasm_bindgen(method, getter)]
    fn grid(this: &IfcViewerApi) -> Grid;

    #[wasm_bindgen(method, getter, js_name = IFC)]
    fn ifc(this: &IfcViewerApi) -> IfcFacade;

    #[wasm_bindgen(method, getter, js_name = shadowDropper)]
    fn shadow_dropper(this: &IfcViewerApi) -> ShadowDropper;

    #[wasm_bindgen(method, getter)]
    fn clipper(this: &IfcViewerApi) -> JsClipper;

    type Axes;

    #[wasm_bindgen(method, js_name = setAxes)]
    fn set_axes(this: &Axes);

    type Grid;

    #[wasm_bindgen(method, js_name = setGrid)]
    fn set_grid(this: &Grid);

    type IfcFacade;

    #[wasm_bindgen(method, getter)]
    fn selector(this: &IfcFacade) -> Selector;

    #[wasm_bindgen(method, getter)]
    fn loader(this: &IfcFacade) -> IfcLoader;

    #[wasm_bindgen(method, catch, js_name = loadIfc)]
    fn load_ifc(
        this: &IfcFacade,
        file: &File,
        fit_to_frame: bool,
        on_error: &Function,
    ) -> std::result::Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getProperties)]
    fn get_properties(
        this: &IfcFacade,
        model_id: u32,
        id: u32,
        indirect: bool,
        recursive: bool,
    ) -> std::result::Result<Promise, JsValue>;

    type IfcLoader;

    #[wasm_bindgen(method, getter, js_name = ifcManager)]
    fn ifc_manager(this: &IfcLoader) -> IfcManager;

    type IfcManager;

    #[wasm_bindgen(method, catch, js_name = applyWebIfcConfig)]
    fn apply_web_ifc_config(
        this: &IfcManager,
        settings: &JsValue,
    ) -> std::result::Result<JsValue, JsValue>;

    /// Plain string in current releases, a promise in older ones
    #[wasm_bindgen(method, catch, js_name = getIfcType)]
    fn get_ifc_type(this: &IfcManager, model_id: u32, id: u32)
        -> std::result::Result<JsValue, JsValue>;

    type Selector;

    #[wasm_bindgen(method, catch, js_name = pickIfcItem)]
    fn pick_ifc_item(this: &Selector, focus_selection: bool)
        -> std::result::Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = prePickIfcItem)]
    fn pre_pick_ifc_item(this: &Selector) -> std::result::Result<JsValue, JsValue>;

    type ShadowDropper;

    #[wasm_bindgen(method, catch, js_name = renderShadow)]
    fn render_shadow(this: &ShadowDropper, model_id: u32) -> std::result::Result<Promise, JsValue>;

    type JsClipper;

    #[wasm_bindgen(method)]
    fn toggle(this: &JsClipper);

    #[wasm_bindgen(method, getter)]
    fn active(this: &JsClipper) -> bool;

    #[wasm_bindgen(method, js_name = deleteAllPlanes)]
    fn delete_all_planes(this: &JsClipper);

    #[wasm_bindgen(method, js_name = createPlane)]
    fn create_plane(this: &JsClipper);
}

/// String form of a thrown JS value (`err.toString()`)
///
/// The load error callback receives `{ error }` rather than the error itself;
/// such wrappers are unwrapped first.
pub fn js_error_string(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.to_string());
    }
    if let Some(message) = err.as_string() {
        return message;
    }
    if err.is_object() {
        if let Ok(inner) = Reflect::get(err, &"error".into()) {
            if !is_absent(&inner) {
                return js_error_string(&inner);
            }
        }
        return String::from(Object::from(err.clone()).to_string());
    }
    format!("{:?}", err)
}

fn js_err(err: JsValue) -> ViewerError {
    ViewerError::js(js_error_string(&err))
}

/// Await a value that may or may not be a promise
async fn settle(value: JsValue) -> std::result::Result<JsValue, JsValue> {
    JsFuture::from(Promise::resolve(&value)).await
}

fn is_absent(value: &JsValue) -> bool {
    value.is_null() || value.is_undefined()
}

/// Clipper of a live viewer
struct WebClipper(JsClipper);

impl Clipper for WebClipper {
    fn toggle(&self) {
        self.0.toggle();
    }

    fn is_active(&self) -> bool {
        self.0.active()
    }

    fn delete_all_planes(&self) {
        self.0.delete_all_planes();
    }

    fn create_plane(&self) {
        self.0.create_plane();
    }
}

/// A web-ifc-viewer instance bound to a container element
pub struct WebViewer {
    api: IfcViewerApi,
    clipper: WebClipper,
}

impl WebViewer {
    /// Create the viewer inside `container` and apply the scene settings
    pub fn new(container: &HtmlElement, config: &ViewerConfig) -> Result<Self> {
        let options = Object::new();
        Reflect::set(&options, &"container".into(), container).map_err(js_err)?;
        Reflect::set(
            &options,
            &"backgroundColor".into(),
            &Color::new(config.background_color),
        )
        .map_err(js_err)?;

        let api = IfcViewerApi::new(&options).map_err(js_err)?;

        if config.show_axes {
            api.axes().set_axes();
        }
        if config.show_grid {
            api.grid().set_grid();
        }

        let settings = serde_wasm_bindgen::to_value(&config.web_ifc)
            .map_err(|e| ViewerError::js(e.to_string()))?;
        let applied = api
            .ifc()
            .loader()
            .ifc_manager()
            .apply_web_ifc_config(&settings)
            .map_err(js_err)?;
        spawn_local(async move {
            if let Err(e) = settle(applied).await {
                log::warn!("Failed to apply web-ifc settings: {}", js_error_string(&e));
            }
        });

        let clipper = WebClipper(api.clipper());
        log::debug!("Viewer created");
        Ok(Self { api, clipper })
    }
}

impl IfcViewer for WebViewer {
    type Source = File;

    fn load(
        &self,
        source: File,
        fit_to_frame: bool,
    ) -> LocalBoxFuture<'_, std::result::Result<ModelId, LoadError>> {
        async move {
            log::info!("Loading {} ({} bytes)", source.name(), source.size());

            let reported = Rc::new(RefCell::new(None::<String>));
            let on_error = {
                let reported = reported.clone();
                Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
                    *reported.borrow_mut() = Some(js_error_string(&err));
                })
            };

            let promise = self
                .api
                .ifc()
                .load_ifc(&source, fit_to_frame, on_error.as_ref().unchecked_ref())
                .map_err(|e| LoadError::new(js_error_string(&e)))?;
            let loaded = JsFuture::from(promise).await;
            drop(on_error);

            let reported = reported.borrow_mut().take();
            if let Some(message) = reported {
                return Err(LoadError::new(message));
            }

            let model = loaded.map_err(|e| LoadError::new(js_error_string(&e)))?;
            if is_absent(&model) {
                return Err(LoadError::new("viewer returned no model"));
            }
            Reflect::get(&model, &"modelID".into())
                .ok()
                .and_then(|id| id.as_f64())
                .map(|id| ModelId(id as u32))
                .ok_or_else(|| LoadError::new("loaded model has no modelID"))
        }
        .boxed_local()
    }

    fn render_shadow(&self, model: ModelId) -> LocalBoxFuture<'_, Result<()>> {
        async move {
            let promise = self.api.shadow_dropper().render_shadow(model.0).map_err(js_err)?;
            JsFuture::from(promise).await.map_err(js_err)?;
            Ok(())
        }
        .boxed_local()
    }

    fn pick(&self, prefer_nearest: bool) -> LocalBoxFuture<'_, Result<Option<PickHit>>> {
        async move {
            let promise = self
                .api
                .ifc()
                .selector()
                .pick_ifc_item(prefer_nearest)
                .map_err(|e| ViewerError::pick(js_error_string(&e)))?;
            let result = JsFuture::from(promise)
                .await
                .map_err(|e| ViewerError::pick(js_error_string(&e)))?;
            if is_absent(&result) {
                return Ok(None);
            }
            serde_wasm_bindgen::from_value(result)
                .map(Some)
                .map_err(|e| ViewerError::pick(e.to_string()))
        }
        .boxed_local()
    }

    fn pre_pick(&self) {
        if let Err(e) = self.api.ifc().selector().pre_pick_ifc_item() {
            log::debug!("Pre-pick failed: {}", js_error_string(&e));
        }
    }

    fn properties(
        &self,
        hit: PickHit,
        include_children: bool,
    ) -> LocalBoxFuture<'_, Result<Option<PropertyBag>>> {
        async move {
            let promise = self
                .api
                .ifc()
                .get_properties(hit.model.0, hit.entity.0, include_children, false)
                .map_err(|e| ViewerError::properties(js_error_string(&e)))?;
            let props = JsFuture::from(promise)
                .await
                .map_err(|e| ViewerError::properties(js_error_string(&e)))?;
            if is_absent(&props) {
                return Ok(None);
            }
            serde_wasm_bindgen::from_value(props)
                .map(Some)
                .map_err(|e| ViewerError::properties(e.to_string()))
        }
        .boxed_local()
    }

    fn ifc_type(&self, hit: PickHit) -> LocalBoxFuture<'_, Result<String>> {
        async move {
            let value = self
                .api
                .ifc()
                .loader()
                .ifc_manager()
                .get_ifc_type(hit.model.0, hit.entity.0)
                .map_err(js_err)?;
            let name = settle(value).await.map_err(js_err)?;
            Ok(name.as_string().unwrap_or_default())
        }
        .boxed_local()
    }

    fn clipper(&self) -> &dyn Clipper {
        &self.clipper
    }
}

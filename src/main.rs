// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
// - Journal                    : tracing (natif : RUST_LOG, défaut "info")
//                                panics -> console du navigateur (web)
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;
mod reglages;

use app::AppCalc;
use reglages::Reglages;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/// Création de l’app (commune natif + web) : thème appliqué avant la première frame.
fn creer_app(ctx: &egui::Context, reglages: Reglages) -> AppCalc {
    app::appliquer_theme(ctx, reglages.theme);
    tracing::info!(?reglages, "calculatrice prête");
    AppCalc::new(reglages)
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal() {
    use tracing_subscriber::EnvFilter;

    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filtre).init();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    installer_journal();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([320.0, 520.0])
            .with_min_inner_size([300.0, 460.0]),
        ..Default::default()
    };

    let reglages = Reglages::default();
    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |cc| Ok(Box::new(creer_app(&cc.egui_ctx, reglages)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{creer_app, Reglages, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        console_error_panic_hook::set_once();

        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let reglages = Reglages::default();
        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(creer_app(&cc.egui_ctx, reglages)))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}

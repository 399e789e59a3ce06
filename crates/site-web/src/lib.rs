#![cfg(target_arch = "wasm32")]
//! WASM entry point: wires the scroll animator, observer fallback, page
//! chrome and the WebGPU scenes, then starts the frame loop.

mod animator;
mod constants;
mod dom;
mod events;
mod frame;
mod loader;
mod observer;
mod overlay;
mod render;
mod ui;

use animator::Animator;
use constants::*;
use events::{EventWiring, PageScroll};
use frame::{FrameContext, Scenes};
use glam::Vec2;
use instant::{Duration, Instant};
use render::{HeroScene, NoiseScene, StarScene, UnderwaterScene};
use site_core::constants::{HERO_FIT_WIDTH, HERO_FIT_WIDTH_MOBILE, MODEL_LOAD_TIMEOUT_SEC};
use site_core::{HeroModel, StarField, UnderwaterSim};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    let el = document.get_element_by_id(id)?;
    match el.dyn_into::<web::HtmlCanvasElement>() {
        Ok(canvas) => Some(canvas),
        Err(_) => {
            log::warn!("#{id} is not a canvas");
            None
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Scroll animator plus an initial pass so elements above the fold are
    // styled before the first scroll event.
    let animator = Rc::new(RefCell::new(Animator::new(&document)));
    animator.borrow_mut().on_scroll();
    observer::wire_fallback_observer(&document, animator.clone())?;

    ui::wire_ui(&document);
    let y0 = dom::scroll_y();
    ui::update_navbar(&document, y0);
    ui::update_active_nav(&document, y0);

    let page = Rc::new(RefCell::new(PageScroll {
        y: y0,
        max: dom::max_scroll(&document),
    }));
    let mouse = Rc::new(RefCell::new(Vec2::ZERO));
    events::wire_event_handlers(EventWiring {
        document: document.clone(),
        animator,
        page: page.clone(),
        mouse: mouse.clone(),
    });

    let hero_canvas = canvas_by_id(&document, HERO_CANVAS_ID);
    let stars_canvas = canvas_by_id(&document, STARS_CANVAS_ID);
    let water_canvas = canvas_by_id(&document, UNDERWATER_CANVAS_ID);
    let noise_canvas = canvas_by_id(&document, NOISE_CANVAS_ID);
    for canvas in [&hero_canvas, &stars_canvas, &water_canvas, &noise_canvas]
        .into_iter()
        .flatten()
    {
        dom::wire_canvas_autosize(canvas);
    }

    // A scene that fails to initialize (no WebGPU, for one) is disabled
    // rather than taking the page down.
    let hero = match &hero_canvas {
        Some(canvas) => match HeroScene::new(canvas.clone()).await {
            Ok(scene) => Some(scene),
            Err(e) => {
                log::error!("hero scene init error: {:?}", e);
                None
            }
        },
        None => None,
    };
    let stars = match &stars_canvas {
        Some(canvas) => match StarScene::new(canvas.clone()).await {
            Ok(scene) => Some(scene),
            Err(e) => {
                log::error!("stars scene init error: {:?}", e);
                None
            }
        },
        None => None,
    };
    let water = match &water_canvas {
        Some(canvas) => match UnderwaterScene::new(canvas.clone()).await {
            Ok(scene) => Some(scene),
            Err(e) => {
                log::error!("underwater scene init error: {:?}", e);
                None
            }
        },
        None => None,
    };
    let noise = match &noise_canvas {
        Some(canvas) => match NoiseScene::new(canvas.clone(), NOISE_INTENSITY, NOISE_CONTRAST).await
        {
            Ok(scene) => Some(scene),
            Err(e) => {
                log::error!("noise scene init error: {:?}", e);
                None
            }
        },
        None => None,
    };

    let (viewport_w, viewport_h) = dom::window_metrics().unwrap_or((1.0, 1.0));
    let is_mobile = viewport_w <= MOBILE_MAX_WIDTH;
    let fit_width = if is_mobile {
        HERO_FIT_WIDTH_MOBILE
    } else {
        HERO_FIT_WIDTH
    };
    let (field_w, field_h) = stars
        .as_ref()
        .map(|s| (s.canvas().width() as f32, s.canvas().height() as f32))
        .unwrap_or((viewport_w, viewport_h));

    let load_slot = Rc::new(RefCell::new(None));
    if hero.is_some() {
        overlay::show(&document);
        loader::spawn_model_fetch(load_slot.clone());
    }

    let now = Instant::now();
    let ctx = FrameContext {
        document,
        page,
        mouse,
        starfield: StarField::new(field_w, field_h, STARFIELD_SEED),
        star_instances: Vec::new(),
        underwater: UnderwaterSim::new(UNDERWATER_SEED),
        sprite_instances: Vec::new(),
        hero_model: HeroModel::default(),
        load_slot,
        load_deadline: now + Duration::from_secs_f64(MODEL_LOAD_TIMEOUT_SEC),
        fit_width,
        scenes: Scenes {
            hero,
            stars,
            water,
            noise,
        },
        last_instant: now,
        time_sec: 0.0,
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}

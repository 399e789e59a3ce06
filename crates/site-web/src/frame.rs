//! Per-frame driver: resolves the hero model load race, steps the scene
//! simulations and renders each canvas, scheduled via requestAnimationFrame.

use crate::events::PageScroll;
use crate::overlay;
use crate::render::{HeroScene, NoiseScene, StarScene, UnderwaterScene};
use glam::Vec2;
use instant::Instant;
use site_core::{hero_pose, HeroModel, LoadEvent, SpriteInstance, StarField, StarInstance, UnderwaterSim};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Scenes {
    pub hero: Option<HeroScene>,
    pub stars: Option<StarScene>,
    pub water: Option<UnderwaterScene>,
    pub noise: Option<NoiseScene>,
}

pub struct FrameContext {
    pub document: web::Document,
    pub page: Rc<RefCell<PageScroll>>,
    pub mouse: Rc<RefCell<Vec2>>,

    pub starfield: StarField,
    pub star_instances: Vec<StarInstance>,
    pub underwater: UnderwaterSim,
    pub sprite_instances: Vec<SpriteInstance>,

    pub hero_model: HeroModel,
    pub load_slot: Rc<RefCell<Option<LoadEvent>>>,
    pub load_deadline: Instant,
    pub fit_width: f32,

    pub scenes: Scenes,
    pub last_instant: Instant,
    pub time_sec: f32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.time_sec += dt_sec;

        self.resolve_model(now);

        if let Some(stars) = &mut self.scenes.stars {
            let canvas = stars.canvas();
            self.starfield
                .resize(canvas.width() as f32, canvas.height() as f32);
            self.starfield.step(dt_sec);
            self.starfield
                .fill_instances(self.time_sec, *self.mouse.borrow(), &mut self.star_instances);
            if let Err(e) = stars.render(&self.star_instances) {
                log::error!("stars render error: {:?}", e);
            }
        }

        if let Some(water) = &mut self.scenes.water {
            self.underwater.step(self.time_sec, dt_sec);
            self.underwater.fill_instances(&mut self.sprite_instances);
            if let Err(e) = water.render(self.time_sec, &self.sprite_instances) {
                log::error!("underwater render error: {:?}", e);
            }
        }

        if let Some(noise) = &mut self.scenes.noise {
            if let Err(e) = noise.render(self.time_sec) {
                log::error!("noise render error: {:?}", e);
            }
        }

        if let Some(hero) = &mut self.scenes.hero {
            let page = *self.page.borrow();
            let pose = hero_pose(self.time_sec, page.y, page.max);
            if let Err(e) = hero.render(&pose) {
                log::error!("hero render error: {:?}", e);
            }
        }
    }

    /// First of {fetch result, deadline} wins; once terminal the mesh is
    /// uploaded and the loading indicator dismissed.
    fn resolve_model(&mut self, now: Instant) {
        if self.hero_model.is_terminal() {
            return;
        }
        let event = match self.load_slot.borrow_mut().take() {
            Some(ev) => ev,
            None if now >= self.load_deadline => LoadEvent::TimedOut,
            None => return,
        };
        if self.hero_model.resolve(event) {
            if let (Some(hero), Some(mesh)) = (&mut self.scenes.hero, self.hero_model.mesh()) {
                let mut mesh = mesh.clone();
                mesh.normalize_to_width(self.fit_width);
                hero.upload_mesh(&mesh);
            }
            overlay::hide(&self.document);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}


mod game;
mod math;
mod render;
mod sat;
mod shape;

use {
    crate::{
        math::*,
        render::LineCanvas,
    },
    ggez::{
        self,
        event, graphics, input::mouse, timer,
        Context, GameResult,
    },
    log::info,
    rand_core::RngCore,
};

const FRAMERATE: u32 = 60;

struct GgezCanvas<'ctx> {
    ctx:   &'ctx mut Context,
    color: graphics::Color,
}

impl LineCanvas for GgezCanvas<'_> {
    fn set_color(&mut self, color: graphics::Color) {
        self.color = color;
    }

    fn line(&mut self, a: P2, b: P2) -> GameResult {
        let mesh = graphics::Mesh::new_line(self.ctx, &[a, b], 1., self.color)?;
        graphics::draw(self.ctx, &mesh, (P2::new(0., 0.),))
    }
}

struct App {
    state: game::State,
}

impl event::EventHandler for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let pos = mouse::position(ctx);
        let pointer = P2::new(pos.x, pos.y);

        while timer::check_update_time(ctx, FRAMERATE) {
            self.state.update(pointer);
        }

        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        graphics::clear(ctx, graphics::BLACK);

        {
            let mut canvas = GgezCanvas { ctx: &mut *ctx, color: graphics::WHITE };
            self.state.draw(&mut canvas)?;
        }

        graphics::present(ctx)?;
        timer::yield_now();
        Ok(())
    }
}

pub fn main() -> GameResult {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let seed = rand::rngs::OsRng.next_u64();
    info!("starting with seed {:#x}", seed);

    let state = game::State::new(seed);

    let window_mode = ggez::conf::WindowMode {
        width:  game::SCREEN_WIDTH,
        height: game::SCREEN_HEIGHT,
        maximized: false,
        fullscreen_type: ggez::conf::FullscreenType::Windowed,
        borderless: false,
        min_width: 0.0,
        max_width: 0.0,
        min_height: 0.0,
        max_height: 0.0,
        resizable: false,
    };

    let window_setup = ggez::conf::WindowSetup {
        title: "SAT collision demo".to_owned(),
        samples: ggez::conf::NumSamples::Zero,
        vsync: true,
        icon: "".to_owned(),
        srgb: true,
    };

    let (ctx, event_loop) = &mut ggez::ContextBuilder::new("sat2d", "ggez")
        .window_mode(window_mode)
        .window_setup(window_setup)
        .build()?;

    let app = &mut App { state };
    event::run(ctx, event_loop, app)
}

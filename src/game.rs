
use {
    crate::{
        math::*,
        render::LineCanvas,
        sat,
        shape::Shape2D,
    },
    ggez::{graphics::Color, GameResult},
    log::debug,
    pcg_rand::Pcg32Basic,
    rand::SeedableRng,
};

pub const SCREEN_WIDTH:  f32 = 1920.;
pub const SCREEN_HEIGHT: f32 = 1080.;

const FOLLOWER_SIZE: f32 = 200.;
const TRIANGLE_SIZE: f32 = 200.;

const RANDOM_POINTS: usize = 10;
const RANDOM_RADIUS: f32   = 200.;
const RANDOM_WOBBLE: f32   = 25.;

const COLOR_IDLE: Color = Color::new(1., 1., 1., 1.);
const COLOR_HIT:  Color = Color::new(1., 0., 0., 1.);

/// Index into the state's shape arena.
pub type ShapeId = usize;

pub struct State {
    shapes:     Vec<Shape2D>,
    follower:   ShapeId,
    stationary: Vec<ShapeId>,
    // Latest test result per stationary shape, parallel to `stationary`.
    // `Some(mtv)` while the follower overlaps that shape.
    contacts:   Vec<Option<V2>>,
}

impl State {
    pub fn new(seed: u64) -> State {
        let mut rng = Pcg32Basic::seed_from_u64(seed);

        let follower = Shape2D::rectangle(0., 0., FOLLOWER_SIZE, FOLLOWER_SIZE);

        let block = Shape2D::rectangle(
            SCREEN_WIDTH * 0.75,
            (SCREEN_HEIGHT - FOLLOWER_SIZE) * 0.5,
            FOLLOWER_SIZE,
            FOLLOWER_SIZE,
        );

        let wedge = Shape2D::right_triangle(
            SCREEN_WIDTH * 0.5,
            SCREEN_HEIGHT * 0.5,
            TRIANGLE_SIZE,
            TRIANGLE_SIZE,
        );

        let blob = Shape2D::random_convex(
                RANDOM_POINTS,
                P2::new(SCREEN_WIDTH * 0.25, SCREEN_HEIGHT * 0.5),
                RANDOM_RADIUS,
                RANDOM_WOBBLE,
                &mut rng,
            )
            .expect("point count is fixed above the minimum");

        let shapes = vec![follower, block, wedge, blob];
        let stationary: Vec<ShapeId> = vec![1, 2, 3];
        let contacts = vec![None; stationary.len()];

        debug!("created {} shapes from seed {:#x}", shapes.len(), seed);

        State { shapes, follower: 0, stationary, contacts }
    }

    /// One simulation step: reposition the follower at the pointer, then
    /// retest it against every stationary shape.
    pub fn update(&mut self, pointer: P2) {
        self.shapes[self.follower]
            .update_rectangle(pointer.x, pointer.y, FOLLOWER_SIZE, FOLLOWER_SIZE);

        let follower = &self.shapes[self.follower];
        for (slot, &id) in self.contacts.iter_mut().zip(self.stationary.iter()) {
            let contact = sat::is_colliding(follower, &self.shapes[id]);

            if contact.is_some() != slot.is_some() {
                match contact {
                    Some(mtv) => debug!("contact with shape {}, mtv {:?}", id, mtv),
                    None      => debug!("separated from shape {}", id),
                }
            }

            *slot = contact;
        }
    }

    /// Outlines every shape with one colour change each: red for a
    /// stationary shape the follower currently overlaps, white otherwise.
    pub fn draw(&self, canvas: &mut impl LineCanvas) -> GameResult {
        for (&id, contact) in self.stationary.iter().zip(self.contacts.iter()) {
            let color = if contact.is_some() { COLOR_HIT } else { COLOR_IDLE };
            canvas.set_color(color);
            self.shapes[id].draw(canvas)?;
        }

        canvas.set_color(COLOR_IDLE);
        self.shapes[self.follower].draw(canvas)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::render::trace::TraceCanvas,
    };

    #[test]
    fn test_follower_tracks_pointer_in_place() {
        let mut state = State::new(5);
        let before = state.shapes[state.follower].clone();

        state.update(P2::new(500., 400.));

        // Same arena slot, new coordinates.
        let follower = &state.shapes[state.follower];
        assert_eq!(follower.vertex(0).unwrap(), P2::new(500., 400.));
        assert_eq!(follower.vertex(2).unwrap(), P2::new(700., 600.));
        assert_ne!(follower.vertex(0).unwrap(), before.vertex(0).unwrap());
    }

    #[test]
    fn test_contacts_follow_the_pointer() {
        let mut state = State::new(5);

        // Top-left corner: clear of everything.
        state.update(P2::new(0., 0.));
        assert!(state.contacts.iter().all(|c| c.is_none()));

        // On top of the stationary rectangle, away from the others.
        state.update(P2::new(SCREEN_WIDTH * 0.75 - 50., SCREEN_HEIGHT * 0.5 - 50.));
        assert!(state.contacts[0].is_some());
        assert!(state.contacts[1].is_none());
        assert!(state.contacts[2].is_none());

        // And clear again.
        state.update(P2::new(0., 0.));
        assert!(state.contacts.iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_draw_sets_one_color_per_shape() {
        let mut state = State::new(5);
        state.update(P2::new(0., 0.));

        let mut canvas = TraceCanvas::new();
        state.draw(&mut canvas).unwrap();

        // Three stationary shapes plus the follower.
        let colors = canvas.colors();
        assert_eq!(colors.len(), 4);

        // Rectangle + triangle + random 10-gon + follower outlines.
        assert_eq!(canvas.lines().len(), 4 + 3 + RANDOM_POINTS + 4);
    }

    #[test]
    fn test_contact_turns_outline_red() {
        let mut state = State::new(5);
        state.update(P2::new(SCREEN_WIDTH * 0.75 - 50., SCREEN_HEIGHT * 0.5 - 50.));

        let mut canvas = TraceCanvas::new();
        state.draw(&mut canvas).unwrap();

        let colors = canvas.colors();
        assert_eq!(colors.len(), 4);
        assert_eq!(colors[0].r, COLOR_HIT.r);
        assert_eq!(colors[0].g, COLOR_HIT.g);
        assert_eq!(colors[1].g, COLOR_IDLE.g);
    }
}

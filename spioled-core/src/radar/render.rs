//! Drawing the radar screen

use libm::{cosf, sinf};
use spioled_display::{arrow, text_width, Color565, Heading, TextCanvas};

use super::target::RAD_TO_DEG;
use super::{Direction, Game, CENTRE, GUTTER_X};

/// Degrees between the lines of one sweep frame
const SWEEP_SPREAD: i32 = 2;

/// Gutter column of the bonus markers
const MARKER_X: i32 = 12;

/// Where the sweep timer lives
const TIMER_MARGIN: i32 = 4;

impl From<Direction> for Heading {
    fn from(d: Direction) -> Self {
        match d {
            Direction::North => Heading::North,
            Direction::South => Heading::South,
            Direction::East => Heading::East,
            Direction::West => Heading::West,
        }
    }
}

impl Game {
    /// Draw the whole frame for the state left by the last `tick`
    pub fn render<C>(&self, canvas: &mut C)
    where
        C: TextCanvas,
        C::Color: From<Color565>,
    {
        self.draw_background(canvas);
        self.draw_scope(canvas, self.rings, self.axes);
        self.draw_gathered(canvas);

        if let Some(dir) = self.heading {
            let c = |c: Color565| C::Color::from(c);
            canvas.blit(0, 0, &arrow(dir.into()), c(Color565::GREEN), c(Color565::BLACK));
        }

        self.draw_sweep(canvas);
        self.draw_echoes(canvas);

        if self.is_over() {
            draw_banner(canvas, "GAME OVER");
        } else {
            self.draw_timer(canvas);
        }
    }

    /// Background and full scope under a centred banner
    pub fn render_banner<C>(&self, canvas: &mut C, text: &str)
    where
        C: TextCanvas,
        C::Color: From<Color565>,
    {
        self.draw_background(canvas);
        self.draw_scope(canvas, true, true);
        draw_banner(canvas, text);
    }

    /// Checkerboard ground, blacked out past the playfield edges
    fn draw_background<C>(&self, canvas: &mut C)
    where
        C: TextCanvas,
        C::Color: From<Color565>,
    {
        let black = C::Color::from(Color565::BLACK);
        let (maxx, maxy) = (canvas.width() - 1, canvas.height() - 1);
        let (px, py) = (self.player.x, self.player.y);
        let field = self.config.playfield;

        canvas.checkerboard(black, C::Color::from(Color565::WHITE));

        if px < CENTRE {
            canvas.fill_rect(0, 0, CENTRE - px, maxy, black, black);
        }
        if py < CENTRE {
            canvas.fill_rect(0, 0, maxx, CENTRE - py, black, black);
        }
        if field - px < CENTRE {
            canvas.fill_rect(field - px + CENTRE, 0, maxx, maxy, black, black);
        }
        if field - py < CENTRE {
            canvas.fill_rect(0, field - py + CENTRE, maxx, maxy, black, black);
        }
    }

    fn draw_scope<C>(&self, canvas: &mut C, rings: bool, axes: bool)
    where
        C: TextCanvas,
        C::Color: From<Color565>,
    {
        let white = C::Color::from(Color565::WHITE);
        let green = C::Color::from(Color565::GREEN);
        let r = self.config.radius;

        canvas.circle(CENTRE, CENTRE, r, white, Some(C::Color::from(Color565::BLACK)));

        if rings {
            canvas.circle(CENTRE, CENTRE, r / 3, green, None);
            canvas.circle(CENTRE, CENTRE, 2 * r / 3, green, None);
        }
        if axes {
            canvas.vline(CENTRE, CENTRE - r, CENTRE + r, white);
            canvas.hline(CENTRE - r, CENTRE + r, CENTRE, white);
        }
    }

    /// Trophy column down the left edge
    fn draw_gathered<C>(&self, canvas: &mut C)
    where
        C: TextCanvas,
        C::Color: From<Color565>,
    {
        let white = C::Color::from(Color565::WHITE);
        let black = C::Color::from(Color565::BLACK);

        for t in self.targets.iter().filter(|t| !t.active) {
            canvas.circle(GUTTER_X, t.y, t.size, white, Some(black));
            if t.rings {
                canvas.circle(MARKER_X, t.y, 2, white, None);
            }
            if t.axes {
                canvas.set_pixel(MARKER_X, t.y, white);
            }
        }
    }

    fn draw_sweep<C>(&self, canvas: &mut C)
    where
        C: TextCanvas,
        C::Color: From<Color565>,
    {
        let green = C::Color::from(Color565::GREEN);
        let r = self.config.radius as f32;

        for i in 0..self.config.sweep_repeats {
            let a = (self.sweep + SWEEP_SPREAD * i) as f32 / RAD_TO_DEG;
            let x = (r * cosf(a) + 0.49) as i32;
            let y = (r * sinf(a) + 0.49) as i32;
            canvas.line(CENTRE, CENTRE, CENTRE + x, CENTRE + y, green);
        }
    }

    fn draw_echoes<C>(&self, canvas: &mut C)
    where
        C: TextCanvas,
        C::Color: From<Color565>,
    {
        let green = C::Color::from(Color565::GREEN);
        for e in self.echoes.iter().filter(|e| e.is_live()) {
            canvas.circle(e.x, e.y, e.radius, green, Some(green));
        }
    }

    /// One bar per sweep down the right edge, used sweeps blacked out
    fn draw_timer<C>(&self, canvas: &mut C)
    where
        C: TextCanvas,
        C::Color: From<Color565>,
    {
        let black = C::Color::from(Color565::BLACK);
        let white = C::Color::from(Color565::WHITE);
        let maxx = canvas.width() - 1;
        let top = TIMER_MARGIN;

        // Edge in GREY25, the dimmest palette grey, not palette entry 1
        canvas.fill_rect(
            maxx - 9,
            top,
            maxx,
            self.config.max_duration as i32 + top,
            C::Color::from(Color565::GREY25),
            black,
        );

        for n in 1..=self.duration {
            let c = if n < self.sweeps { black } else { white };
            canvas.hline(maxx - 8, maxx - 1, n as i32 + top, c);
        }
    }
}

/// Round-cornered box with `text` across the middle of the scope
pub fn draw_banner<C>(canvas: &mut C, text: &str)
where
    C: TextCanvas,
    C::Color: From<Color565>,
{
    let white = C::Color::from(Color565::WHITE);
    let black = C::Color::from(Color565::BLACK);
    let half = text_width(text) / 2;
    let (x1, x2) = (CENTRE - half, CENTRE + half);

    canvas.fill_round_rect(x1 - 2, CENTRE - 8, x2 + 2, CENTRE + 12, 7, white, black);
    canvas.text(x1, CENTRE - 2, text, white, black);
}

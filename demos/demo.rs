use gpui::prelude::*;
use gpui::*;
use gpui_grid::{GridAddress, GridConfig, GridView, TrackSize, TrackSpec};
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

/// Static text card for one cell.
struct TitleCard {
    text: SharedString,
}

impl Render for TitleCard {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .text_size(px(24.0))
            .text_color(gpui::white())
            .child(self.text.clone())
    }
}

const BALL_DIAMETER: f32 = 40.0;

/// A ball bouncing inside its cell, re-reading the cell's extent every
/// frame so it adapts when the surrounding tracks are resized.
struct BouncingBall {
    position: Point<f32>,
    velocity: Point<f32>,
    bounds: Rc<RefCell<Bounds<Pixels>>>,
}

impl BouncingBall {
    fn new() -> Self {
        let mut rng = rand::rng();
        Self {
            position: Point::new(10.0, 10.0),
            velocity: Point::new(rng.random_range(2.0..4.0), rng.random_range(2.0..4.0)),
            bounds: Rc::new(RefCell::new(Bounds::default())),
        }
    }

    fn step(&mut self) {
        let bounds = *self.bounds.borrow();
        let width = f32::from(bounds.size.width);
        let height = f32::from(bounds.size.height);
        if width <= BALL_DIAMETER || height <= BALL_DIAMETER {
            return;
        }
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        if self.position.x <= 0.0 || self.position.x + BALL_DIAMETER >= width {
            self.velocity.x = -self.velocity.x;
            self.position.x = self.position.x.clamp(0.0, width - BALL_DIAMETER);
        }
        if self.position.y <= 0.0 || self.position.y + BALL_DIAMETER >= height {
            self.velocity.y = -self.velocity.y;
            self.position.y = self.position.y.clamp(0.0, height - BALL_DIAMETER);
        }
    }
}

impl Render for BouncingBall {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let this = cx.entity();
        window.on_next_frame(move |_, cx| {
            this.update(cx, |ball, cx| {
                ball.step();
                cx.notify();
            });
        });

        let bounds_rc = self.bounds.clone();
        div()
            .size_full()
            .relative()
            .bg(gpui::black())
            .child(
                canvas(
                    move |_, _, _| {},
                    move |bounds, (), _, _| {
                        *bounds_rc.borrow_mut() = bounds;
                    },
                )
                .absolute()
                .size_full(),
            )
            .child(
                div()
                    .absolute()
                    .left(px(self.position.x))
                    .top(px(self.position.y))
                    .w(px(BALL_DIAMETER))
                    .h(px(BALL_DIAMETER))
                    .rounded_full()
                    .bg(gpui::white()),
            )
    }
}

struct DemoApp {
    grid: Entity<GridView>,
}

impl DemoApp {
    fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let grid = cx.new(|cx| {
            GridView::new(
                GridConfig {
                    rows: TrackSpec::Count(4),
                    columns: TrackSpec::Count(2),
                    gap_thickness: px(5.0),
                    gap_color: gpui::black(),
                    width: px(720.0),
                    height: px(810.0),
                },
                cx,
            )
        });

        grid.update(cx, |view, cx| {
            // A third column up front, then a second row.
            if let Err(err) = view.add_column(0, TrackSize::fr(1.0), window, cx, |handles, _, _| {
                tracing::info!("column cells ready: {}", handles.len());
            }) {
                tracing::error!("add_column failed: {err}");
            }
            if let Err(err) = view.add_row(1, TrackSize::fr(1.0), window, cx, |handles, _, _| {
                tracing::info!("row cells ready: {}", handles.len());
            }) {
                tracing::error!("add_row failed: {err}");
            }
        });

        let title = cx.new(|_| TitleCard {
            text: "TITLE HERE".into(),
        });
        let ball = cx.new(|_| BouncingBall::new());
        grid.update(cx, |view, cx| {
            view.insert(GridAddress::new(2, 0), title, cx);
            view.insert(GridAddress::new(3, 0), ball, cx);
        });

        Self { grid }
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .items_center()
            .justify_center()
            .bg(gpui::white())
            .child(self.grid.clone())
    }
}

fn main() {
    Application::new().run(|cx: &mut App| {
        cx.open_window(WindowOptions::default(), |window, cx| {
            cx.new(|cx| DemoApp::new(window, cx))
        })
        .expect("failed to open window");
    });
}

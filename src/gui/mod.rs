use std::time::Duration;

use iced::{
    alignment, mouse, time,
    widget::canvas::{self, Canvas, Frame, Path, Stroke},
    Color, Element, Length, Pixels, Point, Rectangle, Renderer, Size, Subscription, Task, Theme,
};

use crate::sim::{
    error::SimulationError, initial_parameters::InitialParameters, system::StellarSystem,
};

pub(crate) mod label;

use label::{format_distance_km, project};

pub(crate) const WINDOW_WIDTH: f32 = 750.;
pub(crate) const WINDOW_HEIGHT: f32 = 650.;
const FRAME_INTERVAL: Duration = Duration::from_millis(1000 / 60);
const TRAIL_WIDTH: f32 = 2.;
const LABEL_SIZE: f32 = 16.;

#[derive(Clone, Copy, Debug)]
pub(crate) enum Message {
    Tick,
}

#[derive(Clone, Copy, Debug)]
struct Appearance {
    color: Color,
    radius: f32,
}

pub(crate) struct Gui {
    system: StellarSystem,
    appearances: Vec<Appearance>,
    orbits: canvas::Cache,
    error: Option<SimulationError>,
}

pub(crate) fn run(system: StellarSystem, params: &InitialParameters) -> iced::Result {
    let gui = Gui::new(system, params);
    iced::application(Gui::title, Gui::update, Gui::view)
        .subscription(Gui::subscription)
        .antialiasing(true)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .theme(|_| Theme::Dark)
        .run_with(move || (gui, Task::none()))
}

impl Gui {
    fn new(system: StellarSystem, params: &InitialParameters) -> Self {
        let appearances = params
            .bodies
            .iter()
            .map(|definition| {
                let [r, g, b] = definition.color;
                Appearance {
                    color: Color::from_rgb8(r, g, b),
                    radius: definition.display_radius,
                }
            })
            .collect();
        Gui {
            system,
            appearances,
            orbits: canvas::Cache::default(),
            error: None,
        }
    }

    fn title(&self) -> String {
        let days = self.system.steps;
        match &self.error {
            Some(_) => format!("Solar Planetary System - halted on day {}", days),
            None => format!("Solar Planetary System - day {}", days),
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Tick => {
                if self.error.is_some() {
                    return;
                }
                if let Err(error) = self.system.step() {
                    eprintln!("simulation halted: {}", error);
                    self.error = Some(error);
                }
                self.orbits.clear();
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.error.is_some() {
            Subscription::none()
        } else {
            time::every(FRAME_INTERVAL).map(|_| Message::Tick)
        }
    }

    fn draw_orbits(&self, frame: &mut Frame) {
        frame.fill_rectangle(Point::ORIGIN, frame.size(), Color::BLACK);
        let center = frame.center();

        for (body, appearance) in self.system.bodies.iter().zip(self.appearances.iter()) {
            if body.trail.len() > 2 {
                let trail = Path::new(|builder| {
                    let mut points = body.trail.points().map(|p| project(p, center));
                    if let Some(first) = points.next() {
                        builder.move_to(first);
                    }
                    for point in points {
                        builder.line_to(point);
                    }
                });
                frame.stroke(
                    &trail,
                    Stroke::default()
                        .with_color(appearance.color)
                        .with_width(TRAIL_WIDTH),
                );
            }

            let position = project(&body.position, center);
            frame.fill(&Path::circle(position, appearance.radius), appearance.color);

            if !body.is_anchor() {
                frame.fill_text(canvas::Text {
                    content: format_distance_km(body.distance_to_anchor),
                    position: Point::new(position.x, position.y + appearance.radius + 4.),
                    color: Color::WHITE,
                    size: Pixels(LABEL_SIZE),
                    horizontal_alignment: alignment::Horizontal::Center,
                    ..canvas::Text::default()
                });
            }
        }

        if let Some(error) = &self.error {
            frame.fill_text(canvas::Text {
                content: error.to_string(),
                position: Point::new(10., 10.),
                color: Color::from_rgb8(188, 39, 50),
                size: Pixels(LABEL_SIZE),
                ..canvas::Text::default()
            });
        }
    }
}

impl canvas::Program<Message> for Gui {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let orbits = self
            .orbits
            .draw(renderer, bounds.size(), |frame| self.draw_orbits(frame));
        vec![orbits]
    }
}

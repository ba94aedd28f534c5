use crate::config::PlayState;
use gramophone::{Axis, FrameAction, Gramophone, SizeConstraint};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub gramophone: Rc<RefCell<Gramophone>>,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    TogglePlaying,
    SetPlaying(bool),
    Quit,
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Gramophone, PlayState);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Gramophone"),

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    match key {
                        gtk::gdk::Key::space => {
                            sender.input(AppMsg::TogglePlaying);
                            glib::Propagation::Stop
                        }
                        gtk::gdk::Key::Escape => {
                            sender.input(AppMsg::Quit);
                            glib::Propagation::Stop
                        }
                        _ => glib::Propagation::Proceed,
                    }
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_content_width: width,
                set_content_height: height,

                add_controller = gtk::GestureClick {
                    connect_released[sender] => move |_, _, _, _| {
                        sender.input(AppMsg::TogglePlaying);
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (gramophone, state) = init;

        let width = gramophone.measure(Axis::Horizontal, SizeConstraint::Unspecified);
        let height = gramophone.measure(Axis::Vertical, SizeConstraint::Unspecified);

        let model = AppModel {
            gramophone: Rc::new(RefCell::new(gramophone)),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let gramophone_draw = model.gramophone.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, _| {
                match gramophone_draw.borrow_mut().render(cr, width) {
                    // keep frames coming while the needle is off its paused pose
                    Ok(action) if action.should_redraw => {
                        let drawing_area = drawing_area.clone();
                        glib::idle_add_local_once(move || drawing_area.queue_draw());
                    }
                    Ok(_) => {}
                    Err(e) => log::error!("Drawing error: {}", e),
                }
            });

        if state == PlayState::Playing {
            sender.input(AppMsg::SetPlaying(true));
        }

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        let action: FrameAction = match msg {
            AppMsg::TogglePlaying => {
                let mut gramophone = self.gramophone.borrow_mut();
                let playing = !gramophone.is_playing();
                log::info!("{}", if playing { "Playing" } else { "Paused" });
                gramophone.set_playing(playing)
            }
            AppMsg::SetPlaying(playing) => self.gramophone.borrow_mut().set_playing(playing),
            AppMsg::Quit => {
                relm4::main_application().quit();
                return;
            }
        };

        if action.should_redraw {
            self.drawing_area.queue_draw();
        }
    }
}

use gloo_events::EventListener;
use shared::parallax_offset;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::dom;

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct FloatingShapesProps {
    #[prop_or(4)]
    pub count: usize,
}

pub enum Msg {
    PointerMoved(f64, f64),
}

/// Decorative hero shapes drifting against the mouse pointer.
pub struct FloatingShapes {
    pointer: Option<(f64, f64)>,
    _mouse_listener: EventListener,
}

impl Component for FloatingShapes {
    type Message = Msg;
    type Properties = FloatingShapesProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let listener = EventListener::new(&gloo_utils::document(), "mousemove", move |e| {
            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                link.send_message(Msg::PointerMoved(
                    f64::from(e.client_x()),
                    f64::from(e.client_y()),
                ));
            }
        });

        Self {
            pointer: None,
            _mouse_listener: listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PointerMoved(x, y) => {
                self.pointer = Some((x, y));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let viewport = dom::viewport();

        html! {
            <div class="hero-shapes">
                {
                    for (0..ctx.props().count).map(|idx| {
                        let style = self.pointer.map(|pointer| {
                            let (x, y) = parallax_offset(idx, pointer, viewport);
                            format!("transform: translate({x}px, {y}px)")
                        });

                        html! {
                            <div class={format!("floating-shape shape-{}", idx + 1)} style={style} />
                        }
                    })
                }
            </div>
        }
    }
}

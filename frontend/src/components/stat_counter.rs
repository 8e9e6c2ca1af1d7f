use gloo_timers::callback::Interval;
use shared::{COUNTER_TICK_MS, CounterAnimation};
use yew::prelude::*;

use crate::components::Reveal;

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct StatCounterProps {
    pub value: AttrValue,
    pub label: AttrValue,
}

pub enum Msg {
    Start,
    Tick,
}

pub struct StatCounter {
    text: String,
    counter: Option<CounterAnimation>,
    interval: Option<Interval>,
}

impl Component for StatCounter {
    type Message = Msg;
    type Properties = StatCounterProps;

    fn create(ctx: &Context<Self>) -> Self {
        let value = ctx.props().value.as_str();

        Self {
            text: value.to_owned(),
            counter: CounterAnimation::parse(value),
            interval: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Start => {
                if self.interval.is_some() || self.counter.is_none() {
                    return false;
                }

                let link = ctx.link().clone();
                self.interval = Some(Interval::new(COUNTER_TICK_MS, move || {
                    link.send_message(Msg::Tick);
                }));
                false
            }
            Msg::Tick => {
                let Some(counter) = self.counter.as_mut() else {
                    return false;
                };

                self.text = counter.tick();

                if counter.is_done() {
                    self.counter = None;
                    self.interval = None;
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <Reveal class="stat" on_reveal={ctx.link().callback(|()| Msg::Start)}>
                <span class="stat-number">{self.text.clone()}</span>
                <span class="stat-label">{ctx.props().label.clone()}</span>
            </Reveal>
        }
    }
}

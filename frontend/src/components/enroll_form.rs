use shared::{AGE_GROUPS, EnrollmentForm, Field, SubmitOutcome, Timer, TimerOutcome};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::{create_portal, html::Scope, prelude::*};

use crate::{
    components::{SuccessModal, Toasts},
    scheduler::TimeoutScheduler,
};

pub enum Msg {
    Input(Field, String),
    Submit,
    Timer(Timer),
    DismissConfirmation,
}

pub struct EnrollForm {
    form: EnrollmentForm<TimeoutScheduler>,
    age_ref: NodeRef,
}

impl Component for EnrollForm {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let scheduler = TimeoutScheduler::new(ctx.link().callback(Msg::Timer));

        Self {
            form: EnrollmentForm::new(scheduler),
            age_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(field, value) => {
                self.form.set_field(field, value);
                true
            }
            Msg::Submit => match self.form.submit_fields() {
                SubmitOutcome::Sending | SubmitOutcome::Rejected(_) => true,
                SubmitOutcome::Ignored => false,
            },
            Msg::Timer(timer) => {
                self.form.scheduler_mut().fired(timer);

                match self.form.on_timer(timer) {
                    TimerOutcome::Sent(submission) => {
                        reset_select(self.age_ref.cast::<HtmlSelectElement>());
                        match serde_json::to_string(&submission) {
                            Ok(json) => log::info!("form submitted: {json}"),
                            Err(e) => log::error!("form submitted, serialize error: {e}"),
                        }
                        true
                    }
                    TimerOutcome::NotificationLeaving(_) | TimerOutcome::NotificationRemoved(_) => {
                        true
                    }
                    TimerOutcome::Stale => false,
                }
            }
            Msg::DismissConfirmation => {
                self.form.dismiss_confirmation();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let fields = self.form.fields();
        let invalid = self.form.validation().invalid_field();
        let control = self.form.control();

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <>
            <form id="enrollForm" class="contact-form" onsubmit={onsubmit} novalidate=true>
                <div class="form-row">
                    { Self::view_text_input(link, Field::ParentName, "Parent's Name", "text", &fields.parent_name, invalid) }
                    { Self::view_text_input(link, Field::ChildName, "Child's Name", "text", &fields.child_name, invalid) }
                </div>
                <div class="form-row">
                    { self.view_age_select(link, &fields.child_age, invalid) }
                    { Self::view_text_input(link, Field::Phone, "Phone Number", "tel", &fields.phone, invalid) }
                </div>
                <button type="submit" class="btn btn-primary btn-full" disabled={!control.enabled}>
                    <span>{control.label}</span>
                </button>
            </form>

            // overlays live on <body>, outside of the transformed reveal wrapper
            { create_portal(self.view_overlays(link), gloo_utils::body().into()) }
            </>
        }
    }
}

impl EnrollForm {
    fn view_overlays(&self, link: &Scope<Self>) -> Html {
        html! {
            <>
            <Toasts items={self.form.notifications().items().to_vec()} />

            if self.form.confirmation_visible() {
                <SuccessModal on_close={link.callback(|()| Msg::DismissConfirmation)} />
            }
            </>
        }
    }

    fn view_text_input(
        link: &Scope<Self>,
        field: Field,
        label: &'static str,
        input_type: &'static str,
        value: &str,
        invalid: Option<Field>,
    ) -> Html {
        let oninput = link.callback(move |e: InputEvent| {
            let value = e
                .target_dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            Msg::Input(field, value)
        });

        html! {
            <div class={classes!("form-group", (invalid == Some(field)).then_some("invalid"))}>
                <label for={field.name()}>{label}</label>
                <input
                    id={field.name()}
                    name={field.name()}
                    type={input_type}
                    value={value.to_owned()}
                    autocomplete="off"
                    oninput={oninput} />
            </div>
        }
    }

    fn view_age_select(&self, link: &Scope<Self>, value: &str, invalid: Option<Field>) -> Html {
        let field = Field::ChildAge;
        let onchange = link.callback(move |e: Event| {
            let value = e
                .target_dyn_into::<HtmlSelectElement>()
                .map(|select| select.value())
                .unwrap_or_default();
            Msg::Input(field, value)
        });

        html! {
            <div class={classes!("form-group", (invalid == Some(field)).then_some("invalid"))}>
                <label for={field.name()}>{"Child's Age"}</label>
                <select
                    ref={self.age_ref.clone()}
                    id={field.name()}
                    name={field.name()}
                    onchange={onchange}>
                    <option value="" selected={value.is_empty()}>{"Select age group"}</option>
                    {
                        for AGE_GROUPS.iter().map(|group| html! {
                            <option value={*group} selected={value == *group}>
                                {format!("{group} years")}
                            </option>
                        })
                    }
                </select>
            </div>
        }
    }
}

/// `selected` attributes do not move a select the visitor already touched.
fn reset_select(select: Option<HtmlSelectElement>) {
    match select {
        Some(select) => select.set_value(""),
        None => log::warn!("age select not mounted"),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
#[allow(clippy::unwrap_used)]
mod test {
    use super::reset_select;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::HtmlSelectElement;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_reset_select_after_pick() {
        let document = gloo_utils::document();
        let select: HtmlSelectElement = document
            .create_element("select")
            .unwrap()
            .dyn_into()
            .unwrap();
        for value in ["", "3-4"] {
            let option = document.create_element("option").unwrap();
            option.set_attribute("value", value).unwrap();
            select.append_child(&option).unwrap();
        }

        select.set_value("3-4");
        assert_eq!(select.value(), "3-4");

        reset_select(Some(select.clone()));
        assert_eq!(select.value(), "");
    }
}

use chrono::NaiveDateTime;
use shared::models::{Appointment, CreateAppointmentRequest, Timestamp};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::{UseAsyncOptions, use_async_with_options};
use yew_icons::{Icon, IconId};

use crate::{
    api::ShopKeepClient,
    components::toast::use_toaster,
    net::gate::{FeatureKind, NetworkGate},
};

/// Parses the value of a `datetime-local` input. Naive local times are taken
/// as UTC; timezone handling is out of scope for the thin schema.
pub fn parse_schedule(value: &str) -> Option<Timestamp> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|naive| Timestamp(naive.and_utc()))
}

#[function_component(AppointmentsPage)]
pub fn appointments_page() -> Html {
    let customer_name = use_state(String::new);
    let customer_phone = use_state(String::new);
    let service = use_state(String::new);
    let scheduled_at = use_state(String::new);
    let toaster = use_toaster();

    let appointments = use_async_with_options(
        async move {
            ShopKeepClient::shared()
                .list_appointments()
                .await
                .map_err(|err| err.to_string())
        },
        UseAsyncOptions::enable_auto(),
    );

    let on_refresh = {
        let appointments = appointments.clone();
        Callback::from(move |_: MouseEvent| appointments.run())
    };

    let on_create = {
        let customer_name = customer_name.clone();
        let customer_phone = customer_phone.clone();
        let service = service.clone();
        let scheduled_at = scheduled_at.clone();
        let appointments = appointments.clone();
        let toaster = toaster.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(when) = parse_schedule(&scheduled_at) else {
                toaster.error("Pick a valid date and time");
                return;
            };
            let request = CreateAppointmentRequest {
                customer_name: (*customer_name).clone(),
                customer_phone: (*customer_phone).clone(),
                service: (*service).clone(),
                scheduled_at: when,
            };
            let customer_name = customer_name.clone();
            let customer_phone = customer_phone.clone();
            let service = service.clone();
            let scheduled_at = scheduled_at.clone();
            let appointments = appointments.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match ShopKeepClient::shared().create_appointment(&request).await {
                    Ok(created) => {
                        toaster.success(format!("Booked {}", created.customer_name));
                        customer_name.set(String::new());
                        customer_phone.set(String::new());
                        service.set(String::new());
                        scheduled_at.set(String::new());
                        appointments.run();
                    }
                    Err(err) => toaster.error(format!("Could not book appointment: {err}")),
                }
            });
        })
    };

    let send_reminder = {
        let toaster = toaster.clone();
        Callback::from(move |appointment: Appointment| {
            let toaster = toaster.clone();
            spawn_local(async move {
                match ShopKeepClient::shared().send_reminder(appointment.id).await {
                    Ok(response) => {
                        toaster.success(format!("Reminder on its way to {}", response.to));
                    }
                    Err(err) => toaster.error(format!("Reminder failed: {err}")),
                }
            });
        })
    };

    let bind_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    html! {
        <div class="p-4 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"Appointments"}</h1>
                <NetworkGate kind={FeatureKind::Sync}>
                    <button class="btn btn-ghost btn-sm" onclick={on_refresh}>{"Refresh"}</button>
                </NetworkGate>
            </div>

            if let Some(error) = &appointments.error {
                <div class="alert alert-error"><span>{format!("Could not load appointments: {error}")}</span></div>
            }

            if appointments.loading {
                <span class="loading loading-dots loading-md"></span>
            }

            <div class="overflow-x-auto">
                <table class="table">
                    <thead>
                        <tr>
                            <th>{"Customer"}</th>
                            <th>{"Phone"}</th>
                            <th>{"Service"}</th>
                            <th>{"When"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for appointments.data.iter().flatten().map(|appointment| {
                            let on_send = {
                                let send_reminder = send_reminder.clone();
                                let appointment = appointment.clone();
                                Callback::from(move |_: MouseEvent| {
                                    send_reminder.emit(appointment.clone());
                                })
                            };
                            html! {
                                <tr key={appointment.id.to_string()}>
                                    <td>{&appointment.customer_name}</td>
                                    <td>{&appointment.customer_phone}</td>
                                    <td>{&appointment.service}</td>
                                    <td>{appointment.scheduled_at.0.format("%Y-%m-%d %H:%M").to_string()}</td>
                                    <td>
                                        <NetworkGate kind={FeatureKind::Marketing}>
                                            <button class="btn btn-outline btn-xs" onclick={on_send}>
                                                <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-4 h-4" />
                                                {"Remind"}
                                            </button>
                                        </NetworkGate>
                                    </td>
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>

            <form class="card bg-base-200 p-4 flex flex-row gap-2 items-end" onsubmit={on_create}>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Customer"}</span></label>
                    <input class="input input-bordered input-sm" required=true
                        value={(*customer_name).clone()} oninput={bind_input(&customer_name)} />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Phone"}</span></label>
                    <input class="input input-bordered input-sm" required=true
                        value={(*customer_phone).clone()} oninput={bind_input(&customer_phone)} />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Service"}</span></label>
                    <input class="input input-bordered input-sm" required=true
                        value={(*service).clone()} oninput={bind_input(&service)} />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"When"}</span></label>
                    <input class="input input-bordered input-sm" type="datetime-local" required=true
                        value={(*scheduled_at).clone()} oninput={bind_input(&scheduled_at)} />
                </div>
                <button class="btn btn-primary btn-sm" type="submit">{"Book"}</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_schedule_accepts_datetime_local_values() {
        let parsed = parse_schedule("2026-09-03T14:30").expect("valid input");
        assert_eq!(
            parsed.0.format("%Y-%m-%d %H:%M").to_string(),
            "2026-09-03 14:30"
        );
    }

    #[test]
    fn parse_schedule_rejects_garbage() {
        assert!(parse_schedule("").is_none());
        assert!(parse_schedule("tomorrow at noon").is_none());
        assert!(parse_schedule("2026-09-03").is_none());
    }
}

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{use_api, use_fetch_seq};
use crate::bus::{publish, use_bus, Topic};
use crate::components::icons::{
    icon_calendar, icon_check_circle, icon_edit, icon_plus, icon_target, icon_trash,
    icon_trending_up,
};
use crate::components::toast::{show_error, use_toast};
use crate::components::{bind_input, confirm};
use crate::format;
use crate::models::{parse_amount, parse_date, GoalPayload, SavingsGoal};
use crate::stats::{goal_progress, monthly_savings};

const DEFAULT_COLOR: &str = "#10b981";

#[function_component(GoalsPage)]
pub fn goals_page() -> Html {
    let api = use_api();
    let bus = use_bus();
    let toast = use_toast();
    let seq = use_fetch_seq();

    let goals = use_state(Vec::<SavingsGoal>::new);
    let show_form = use_state(|| false);
    let editing_id = use_state(|| None::<i64>);
    let form_name = use_state(String::new);
    let form_target = use_state(String::new);
    let form_current = use_state(|| "0".to_string());
    let form_deadline = use_state(String::new);
    let form_color = use_state(|| DEFAULT_COLOR.to_string());

    {
        let api = api.clone();
        let seq = seq.clone();
        let goals = goals.clone();
        use_effect_with_deps(
            move |_: &u64| {
                let ticket = seq.issue();
                spawn_local(async move {
                    match api.get::<Vec<SavingsGoal>>("/goals", &[]).await {
                        Ok(list) if seq.is_current(ticket) => goals.set(list),
                        Ok(_) => {}
                        Err(err) => web_sys::console::error_1(
                            &format!("goals fetch failed: {}", err).into(),
                        ),
                    }
                });
                || ()
            },
            (*bus).stamp(Topic::Goals),
        );
    }

    let on_new = {
        let show_form = show_form.clone();
        let editing_id = editing_id.clone();
        let form_name = form_name.clone();
        let form_target = form_target.clone();
        let form_current = form_current.clone();
        let form_deadline = form_deadline.clone();
        let form_color = form_color.clone();
        Callback::from(move |_| {
            editing_id.set(None);
            form_name.set(String::new());
            form_target.set(String::new());
            form_current.set("0".to_string());
            form_deadline.set(String::new());
            form_color.set(DEFAULT_COLOR.to_string());
            show_form.set(!*show_form);
        })
    };

    let on_edit = {
        let show_form = show_form.clone();
        let editing_id = editing_id.clone();
        let form_name = form_name.clone();
        let form_target = form_target.clone();
        let form_current = form_current.clone();
        let form_deadline = form_deadline.clone();
        let form_color = form_color.clone();
        Callback::from(move |goal: SavingsGoal| {
            editing_id.set(Some(goal.id));
            form_name.set(goal.name.clone());
            form_target.set(goal.target_amount.to_string());
            form_current.set(goal.current_amount.to_string());
            form_deadline.set(goal.deadline.map(format::iso).unwrap_or_default());
            form_color.set(goal.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string()));
            show_form.set(true);
        })
    };

    let on_submit = {
        let api = api.clone();
        let bus = bus.clone();
        let toast = toast.clone();
        let show_form = show_form.clone();
        let editing_id = editing_id.clone();
        let form_name = form_name.clone();
        let form_target = form_target.clone();
        let form_current = form_current.clone();
        let form_deadline = form_deadline.clone();
        let form_color = form_color.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = match parse_goal_form(
                &form_name,
                &form_target,
                &form_current,
                &form_deadline,
                &form_color,
            ) {
                Ok(payload) => payload,
                Err(message) => {
                    show_error(&toast, message);
                    return;
                }
            };
            let api = api.clone();
            let bus = bus.clone();
            let toast = toast.clone();
            let show_form = show_form.clone();
            let editing = *editing_id;
            spawn_local(async move {
                let outcome = match editing {
                    Some(id) => api.put::<_, SavingsGoal>(&format!("/goals/{}", id), &payload).await,
                    None => api.post::<_, SavingsGoal>("/goals", &payload).await,
                };
                match outcome {
                    Ok(_) => {
                        show_form.set(false);
                        publish(&bus, Topic::Goals);
                    }
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        let bus = bus.clone();
        let toast = toast.clone();
        Callback::from(move |id: i64| {
            if !confirm("Sei sicuro di voler eliminare questo obiettivo?") {
                return;
            }
            let api = api.clone();
            let bus = bus.clone();
            let toast = toast.clone();
            spawn_local(async move {
                match api.delete(&format!("/goals/{}", id)).await {
                    Ok(()) => publish(&bus, Topic::Goals),
                    Err(err) => show_error(&toast, err.to_string()),
                }
            });
        })
    };

    let field_class = "w-full rounded-xl border border-slate-200 shadow-sm focus:border-emerald-500 focus:ring-emerald-500 py-2.5 px-3";
    let today = format::today();

    html! {
        <div class="space-y-6">
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4">
                <div>
                    <h1 class="text-2xl font-bold text-slate-800">{"Obiettivi di Risparmio"}</h1>
                    <p class="text-slate-500 text-sm">{"Pianifica i tuoi acquisti futuri"}</p>
                </div>
                <button onclick={on_new} class="bg-emerald-600 text-white px-5 py-2.5 rounded-xl flex items-center space-x-2 hover:bg-emerald-700 transition-all shadow-sm hover:shadow-md">
                    { icon_plus() }
                    <span>{"Nuovo Obiettivo"}</span>
                </button>
            </div>

            if *show_form {
                <div class="bg-white p-6 rounded-2xl shadow-lg border border-slate-100">
                    <h2 class="text-lg font-semibold mb-4 text-slate-800">
                        { if editing_id.is_some() { "Modifica Obiettivo" } else { "Nuovo Obiettivo" } }
                    </h2>
                    <form onsubmit={on_submit} class="space-y-4">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div class="md:col-span-2">
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Nome"}</label>
                                <input type="text" required=true placeholder="es. Vacanze estive" value={(*form_name).clone()} oninput={bind_input(form_name.clone())} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Importo Obiettivo (€)"}</label>
                                <input type="number" step="0.01" required=true placeholder="0.00" value={(*form_target).clone()} oninput={bind_input(form_target.clone())} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Già Risparmiato (€)"}</label>
                                <input type="number" step="0.01" value={(*form_current).clone()} oninput={bind_input(form_current.clone())} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Scadenza (opzionale)"}</label>
                                <input type="date" value={(*form_deadline).clone()} oninput={bind_input(form_deadline.clone())} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-2">{"Colore"}</label>
                                <input type="color" value={(*form_color).clone()} oninput={bind_input(form_color.clone())} class="w-full h-[46px] rounded-xl border border-slate-200 shadow-sm cursor-pointer" />
                            </div>
                        </div>
                        <div class="flex justify-end space-x-3 pt-2">
                            <button
                                type="button"
                                onclick={{
                                    let show_form = show_form.clone();
                                    Callback::from(move |_| show_form.set(false))
                                }}
                                class="px-5 py-2.5 text-slate-600 hover:bg-slate-100 rounded-xl font-medium transition-colors"
                            >
                                {"Annulla"}
                            </button>
                            <button type="submit" class="px-5 py-2.5 bg-emerald-600 text-white rounded-xl hover:bg-emerald-700 font-medium shadow-sm hover:shadow-md transition-all">
                                {"Salva"}
                            </button>
                        </div>
                    </form>
                </div>
            }

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for goals.iter().map(|goal| {
                    let progress = goal_progress(goal.current_amount, goal.target_amount);
                    let per_month = monthly_savings(goal.target_amount, goal.current_amount, goal.deadline, today);
                    let completed = goal.current_amount >= goal.target_amount;
                    let color = goal.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string());
                    let on_edit = on_edit.clone();
                    let edit_target = goal.clone();
                    let on_delete = on_delete.clone();
                    let goal_id = goal.id;
                    html! {
                        <div key={goal.id} class="bg-white p-6 rounded-2xl shadow-sm border border-slate-100 hover:shadow-md transition-shadow duration-200">
                            <div class="flex justify-between items-start mb-4">
                                <div class="flex items-center space-x-3">
                                    <div class="p-2 rounded-lg" style={format!("background-color: {}20; color: {}", color, color)}>
                                        { icon_target() }
                                    </div>
                                    <div>
                                        <h3 class="font-bold text-slate-800">{ &goal.name }</h3>
                                        if let Some(deadline) = goal.deadline {
                                            <p class="text-xs text-slate-500 flex items-center space-x-1">
                                                <span>{ icon_calendar() }</span>
                                                <span>{ format::date_medium(deadline) }</span>
                                            </p>
                                        }
                                    </div>
                                </div>
                                <div class="flex space-x-1">
                                    <button
                                        onclick={Callback::from(move |_| on_edit.emit(edit_target.clone()))}
                                        class="text-slate-300 hover:text-emerald-600 p-2 hover:bg-emerald-50 rounded-lg transition-colors"
                                    >
                                        { icon_edit() }
                                    </button>
                                    <button
                                        onclick={Callback::from(move |_| on_delete.emit(goal_id))}
                                        class="text-slate-300 hover:text-rose-600 p-2 hover:bg-rose-50 rounded-lg transition-colors"
                                    >
                                        { icon_trash() }
                                    </button>
                                </div>
                            </div>

                            <div class="flex items-baseline justify-between mb-2">
                                <span class="text-2xl font-bold text-slate-800">{ format::eur(goal.current_amount) }</span>
                                <span class="text-sm text-slate-500">{ format!("di {}", format::eur(goal.target_amount)) }</span>
                            </div>

                            <div class="h-3 bg-slate-100 rounded-full overflow-hidden mb-2">
                                <div
                                    class="h-full rounded-full transition-all duration-500"
                                    style={format!("width: {}%; background-color: {}", progress, color)}
                                />
                            </div>
                            <p class="text-xs text-slate-500 text-right mb-3">{ format!("{:.0}%", progress) }</p>

                            if completed {
                                <div class="flex items-center space-x-2 text-emerald-600 text-sm bg-emerald-50 p-2 rounded-lg">
                                    { icon_check_circle() }
                                    <span class="font-medium">{"Obiettivo raggiunto!"}</span>
                                </div>
                            } else if let Some(per_month) = per_month {
                                <div class="flex items-center space-x-2 text-slate-600 text-sm bg-slate-50 p-2 rounded-lg">
                                    { icon_trending_up() }
                                    <span>{ format!("Risparmia {} al mese", format::eur(per_month)) }</span>
                                </div>
                            }
                        </div>
                    }
                }) }
            </div>

            if goals.is_empty() {
                <div class="bg-white p-12 rounded-2xl shadow-sm border border-slate-100 text-center">
                    <div class="p-4 bg-slate-50 rounded-full w-20 h-20 mx-auto mb-4 flex items-center justify-center text-slate-300">
                        { icon_target() }
                    </div>
                    <h3 class="text-lg font-semibold text-slate-700 mb-2">{"Nessun Obiettivo"}</h3>
                    <p class="text-slate-500 text-sm">{"Crea il tuo primo obiettivo di risparmio"}</p>
                </div>
            }
        </div>
    }
}

fn parse_goal_form(
    name: &str,
    target: &str,
    current: &str,
    deadline: &str,
    color: &str,
) -> Result<GoalPayload, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Il nome è obbligatorio".to_string());
    }
    let current_amount = if current.trim().is_empty() {
        0.0
    } else {
        let current: f64 = current
            .trim()
            .replace(',', ".")
            .parse()
            .map_err(|_| "L'importo risparmiato non è un numero valido".to_string())?;
        if current < 0.0 {
            return Err("L'importo risparmiato non può essere negativo".to_string());
        }
        current
    };
    let deadline = if deadline.trim().is_empty() {
        None
    } else {
        Some(parse_date(deadline)?)
    };
    Ok(GoalPayload {
        name: name.to_string(),
        target_amount: parse_amount(target)?,
        current_amount,
        deadline,
        color: color.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_goal_form;

    #[test]
    fn goal_form_defaults_and_validation() {
        assert!(parse_goal_form("", "2000", "0", "", "#10b981").is_err());
        assert!(parse_goal_form("Vacanze", "0", "0", "", "#10b981").is_err());
        assert!(parse_goal_form("Vacanze", "2000", "-5", "", "#10b981").is_err());
        let payload = parse_goal_form("Vacanze", "2000", "", "", "#10b981").unwrap();
        assert_eq!(payload.current_amount, 0.0);
        assert_eq!(payload.deadline, None);
        let dated = parse_goal_form("Vacanze", "2000", "500", "2026-12-01", "#10b981").unwrap();
        assert!(dated.deadline.is_some());
    }
}

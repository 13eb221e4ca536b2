//! Messaging page: inbox list, open conversation, and new-conversation dialog.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::messages::{self, Contact, InboxTab, MessagingState, age_label};
use crate::util::text::matches_query;

#[component]
fn ConversationList(inbox: RwSignal<MessagingState>) -> impl IntoView {
    let rows = move || {
        inbox.with(|m| {
            m.visible()
                .into_iter()
                .map(|conv| {
                    let id = conv.id.clone();
                    let selected = m.selected.as_deref() == Some(conv.id.as_str());
                    let name = conv.display_name(&m.me.id);
                    let preview = conv.last_message().map(|msg| msg.text.clone()).unwrap_or_default();
                    let age = conv.last_message().map(|msg| age_label(msg.age_minutes)).unwrap_or_default();
                    let unread = conv.unread;
                    view! {
                        <li
                            class="inbox__row"
                            class:inbox__row--selected=selected
                            on:click=move |_| inbox.update(|m| m.select(&id))
                        >
                            <div class="inbox__row-head">
                                <span class="inbox__name">{name}</span>
                                <span class="inbox__age">{age}</span>
                            </div>
                            <div class="inbox__preview">{preview}</div>
                            {(unread > 0).then(|| view! { <span class="badge badge--count">{unread}</span> })}
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <aside class="inbox">
            <input
                class="inbox__search"
                type="search"
                placeholder="Search conversations..."
                prop:value=move || inbox.with(|m| m.query.clone())
                on:input=move |ev| inbox.update(|m| m.query = event_target_value(&ev))
            />
            <div class="segmented">
                {InboxTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="segmented__item"
                                class:segmented__item--active=move || inbox.with(|m| m.tab == tab)
                                on:click=move |_| inbox.update(|m| m.tab = tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <ul class="inbox__list">
                {move || {
                    if inbox.with(|m| m.visible().is_empty()) {
                        view! { <li class="card__empty">"No conversations found."</li> }.into_any()
                    } else {
                        rows().into_any()
                    }
                }}
            </ul>
        </aside>
    }
}

#[component]
fn Thread(inbox: RwSignal<MessagingState>) -> impl IntoView {
    let header = move || {
        inbox.with(|m| {
            m.current().map(|conv| {
                let members = conv.participants.iter().filter(|p| p.id != m.me.id).count();
                let detail = if conv.is_group() { format!("{members} members") } else { "Direct message".to_owned() };
                (conv.display_name(&m.me.id), detail)
            })
        })
    };
    let bubbles = move || {
        inbox.with(|m| {
            m.current()
                .map(|conv| {
                    conv.messages
                        .iter()
                        .map(|msg| {
                            let mine = msg.sender_id == m.me.id;
                            let status = mine.then(|| msg.status.glyph());
                            view! {
                                <div class="bubble" class:bubble--mine=mine>
                                    <p>{msg.text.clone()}</p>
                                    <span class="bubble__meta">{age_label(msg.age_minutes)} " " {status}</span>
                                </div>
                            }
                        })
                        .collect_view()
                })
        })
    };
    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        inbox.update(|m| {
            if let Some(id) = m.send() {
                log::debug!("message queued id={id}");
            }
        });
    };

    view! {
        <section class="thread">
            {move || match header() {
                Some((name, detail)) => view! {
                    <header class="thread__header">
                        <strong>{name}</strong>
                        <span>{detail}</span>
                    </header>
                }
                .into_any(),
                None => view! { <p class="card__empty">"Select a conversation."</p> }.into_any(),
            }}
            <div class="thread__messages">{bubbles}</div>
            <form class="thread__composer" on:submit=on_send>
                <input
                    class="thread__input"
                    placeholder="Type a message..."
                    prop:value=move || inbox.with(|m| m.draft.clone())
                    on:input=move |ev| inbox.update(|m| m.draft = event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Send"</button>
            </form>
        </section>
    }
}

#[component]
fn NewConversationDialog(inbox: RwSignal<MessagingState>, open: RwSignal<bool>) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let contacts = move || {
        let query = search.get();
        messages::directory()
            .into_iter()
            .filter(|c| matches_query(&c.name, &query))
            .map(|contact: Contact| {
                let id = contact.id.clone();
                let picked = move || inbox.with(|m| m.is_picked(&id));
                let role = contact.role.label();
                let presence = contact.presence.css_class();
                let name = contact.name.clone();
                view! {
                    <li
                        class="picker__row"
                        class:picker__row--picked=picked
                        on:click=move |_| inbox.update(|m| m.toggle_pick(&contact))
                    >
                        <span class=presence></span>
                        <span class="picker__name">{name}</span>
                        <span class="picker__role">{role}</span>
                    </li>
                }
            })
            .collect_view()
    };
    let on_create = move |_| {
        let mut created = None;
        inbox.update(|m| created = m.create_conversation());
        if created.is_some() {
            open.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| open.set(false)>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Message"</h2>
                <input
                    class="dialog__input"
                    type="search"
                    placeholder="Search people..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <div class="picker__chips">
                    {move || {
                        inbox.with(|m| {
                            m.picked
                                .iter()
                                .map(|c| view! { <span class="chip">{c.name.clone()}</span> })
                                .collect_view()
                        })
                    }}
                </div>
                <ul class="picker">{contacts}</ul>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| open.set(false)>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        disabled=move || inbox.with(|m| m.picked.is_empty())
                        on:click=on_create
                    >
                        "Start conversation"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let Some(user) = auth.with_untracked(|a| a.user().cloned()) else {
        return ().into_any();
    };
    let inbox = RwSignal::new(MessagingState::for_user(&user));
    let dialog_open = RwSignal::new(false);

    view! {
        <div class="messages-page">
            <div class="messages-page__toolbar">
                <h2>"Messages"</h2>
                <button class="btn btn--primary" on:click=move |_| dialog_open.set(true)>"+ New Message"</button>
            </div>
            <div class="messages-page__body">
                <ConversationList inbox/>
                <Thread inbox/>
            </div>
            <Show when=move || dialog_open.get()>
                <NewConversationDialog inbox open=dialog_open/>
            </Show>
        </div>
    }
    .into_any()
}

use leptos::{form::ActionForm, html, prelude::*};

use crate::contact::{Priority, FAILURE_MESSAGE, MESSAGE_COUNTER_LIMIT};

#[server(prefix = "/api", endpoint = "contact_form")]
pub async fn submit_contact(
    name: String,
    email: String,
    subject: Option<String>,
    priority: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::contact::{ContactService, ContactSubmission};

    let Some(service) = use_context::<ContactService>() else {
        tracing::error!("ContactService missing from server function context");
        return Err(ServerFnError::new(FAILURE_MESSAGE));
    };
    let submission = ContactSubmission {
        name,
        email,
        subject,
        priority,
        message,
    };
    service.submit(&submission).await.map_err(|e| {
        tracing::error!(error = %e, "Erro ao enviar e-mail");
        ServerFnError::new(FAILURE_MESSAGE)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

impl ContactStatus {
    fn from_action(pending: bool, value: Option<&Result<(), ServerFnError>>) -> Self {
        if pending {
            return Self::Submitting;
        }
        match value {
            None => Self::Idle,
            Some(Ok(())) => Self::Success,
            Some(Err(_)) => Self::Error,
        }
    }

    fn message(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Submitting => Some("Sending..."),
            Self::Success => Some("Message sent! I'll get back to you soon."),
            Self::Error => Some(FAILURE_MESSAGE),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Self::Error => "text-sm text-red",
            Self::Success => "text-sm text-green",
            _ => "text-sm text-muted",
        }
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let submit = ServerAction::<SubmitContact>::new();
    let form_ref = NodeRef::<html::Form>::new();
    let (message_len, set_message_len) = signal(0usize);

    let status = move || {
        let pending = submit.pending().get();
        submit
            .value()
            .with(|value| ContactStatus::from_action(pending, value.as_ref()))
    };

    Effect::new(move |_| match status() {
        ContactStatus::Success => {
            if let Some(form) = form_ref.get() {
                form.reset();
            }
            set_message_len.set(0);
        }
        ContactStatus::Error => log::warn!("contact submission failed"),
        _ => {}
    });

    view! {
        <ActionForm action=submit node_ref=form_ref>
            <div class="space-y-6 p-8 rounded-3xl">
                <div class="space-y-2">
                    <label for="name" class="text-sm font-medium">
                        "Name"
                    </label>
                    <input
                        id="name"
                        name="name"
                        placeholder="How should I call you?"
                        required=true
                        class="w-full h-12 px-4 rounded-xl"
                    />
                </div>
                <div class="space-y-2">
                    <label for="email" class="text-sm font-medium">
                        "Email"
                    </label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        placeholder="Your best email"
                        required=true
                        class="w-full h-12 px-4 rounded-xl"
                    />
                </div>
                <div class="space-y-2">
                    <label for="subject" class="text-sm font-medium">
                        "Subject"
                    </label>
                    <input
                        id="subject"
                        name="subject"
                        placeholder="What is it about?"
                        class="w-full h-12 px-4 rounded-xl"
                    />
                </div>
                <div class="space-y-2">
                    <label for="priority" class="text-sm font-medium">
                        "Priority"
                    </label>
                    <select id="priority" name="priority" class="w-full h-12 px-4 rounded-xl">
                        {Priority::ALL
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <option value=p.as_str() selected={p == Priority::default()}>
                                        {p.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="space-y-2">
                    <label for="message" class="text-sm font-medium">
                        "Message"
                    </label>
                    <textarea
                        id="message"
                        name="message"
                        placeholder="How can I help you?"
                        required=true
                        class="w-full min-h-[150px] p-4 rounded-xl resize-none"
                        on:input=move |ev| {
                            set_message_len.set(event_target_value(&ev).chars().count())
                        }
                    ></textarea>
                    <div class="text-right text-xs text-muted">
                        {move || format!("{}/{}", message_len.get(), MESSAGE_COUNTER_LIMIT)}
                    </div>
                </div>
                <button
                    type="submit"
                    class="w-full h-12 rounded-xl text-base font-medium"
                    disabled=move || submit.pending().get()
                >
                    "Send Message"
                </button>
                {move || {
                    let current = status();
                    current
                        .message()
                        .map(|text| {
                            view! {
                                <p class=current.class() role="status">
                                    {text}
                                </p>
                            }
                        })
                }}
            </div>
        </ActionForm>
    }
}

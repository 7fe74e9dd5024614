use crate::api;
use crate::app::Route;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

pub enum LoginMsg {
    Email(String),
    Password(String),
    Submit,
    Done(Result<(), String>),
}

pub struct LoginPage {
    email: String,
    password: String,
    error: Option<String>,
    loading: bool,
}

impl Component for LoginPage {
    type Message = LoginMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            error: None,
            loading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // ошибка прячется при любом вводе
            LoginMsg::Email(value) => {
                self.email = value;
                self.error = None;
                true
            }
            LoginMsg::Password(value) => {
                self.password = value;
                self.error = None;
                true
            }
            LoginMsg::Submit => {
                let email = self.email.trim().to_string();
                let password = self.password.clone();

                if email.is_empty() || password.is_empty() {
                    self.error = Some("Email dan password harus diisi".to_string());
                    return true;
                }

                self.loading = true;
                self.error = None;

                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(LoginMsg::Done(api::login(&email, &password).await));
                });
                true
            }
            LoginMsg::Done(Ok(())) => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Dashboard);
                }
                false
            }
            LoginMsg::Done(Err(e)) => {
                log::error!("Login error: {}", e);
                self.error = Some(e);
                self.loading = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_email = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            LoginMsg::Email(input.value())
        });
        let on_password = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            LoginMsg::Password(input.value())
        });
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            LoginMsg::Submit
        });

        html! {
            <div class="login-page">
                <form class="login-card" {onsubmit}>
                    <h1>{ "🌿 RuangHijau Admin" }</h1>

                    if let Some(error) = &self.error {
                        <div class="error-message">{ error }</div>
                    }

                    <input
                        type="email"
                        placeholder="Email"
                        value={self.email.clone()}
                        oninput={on_email}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={self.password.clone()}
                        oninput={on_password}
                    />
                    <button type="submit" class="btn btn-primary" disabled={self.loading}>
                        if self.loading {
                            { "Memproses..." }
                        } else {
                            { "Masuk" }
                        }
                    </button>
                </form>
            </div>
        }
    }
}

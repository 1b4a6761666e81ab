//! 登录页面
//!
//! 全页渲染，不带应用外壳。除登录外还承载两条低频入口：
//! 一次性初始凭据创建，以及基于一次性验证码的注册。

use leptos::prelude::*;
use leptos::task::spawn_local;

use mts_purchase_shared::{LoginRequest, RegisterRequestOtp, RegisterVerifyOtp, SetupRequest};

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::toast::use_toast;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let toast = use_toast();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let (setup_username, set_setup_username) = signal(String::new());
    let (setup_password, set_setup_password) = signal(String::new());

    let (reg_username, set_reg_username) = signal(String::new());
    let (reg_email, set_reg_email) = signal(String::new());
    let (reg_otp, set_reg_otp) = signal(String::new());
    let (reg_password, set_reg_password) = signal(String::new());

    let on_login = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let username = username.get().trim().to_string();
            let password = password.get();
            if username.is_empty() || password.is_empty() {
                toast.error("Please fill in all fields");
                return;
            }

            set_is_submitting.set(true);
            let api = api.clone();
            spawn_local(async move {
                match api.login(&LoginRequest { username, password }).await {
                    Ok(session) => {
                        auth.save(Some(session));
                        toast.success("Login successful");
                        router.navigate(AppRoute::Landing);
                    }
                    Err(error) => toast.error(error.to_string()),
                }
                set_is_submitting.try_set(false);
            });
        }
    };

    let on_setup = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let username = setup_username.get().trim().to_string();
            let password = setup_password.get();
            if username.is_empty() || password.is_empty() {
                toast.error("Please fill in all fields");
                return;
            }

            let api = api.clone();
            spawn_local(async move {
                match api.setup(&SetupRequest { username, password }).await {
                    Ok(()) => toast.success("Initial credential setup completed"),
                    Err(error) => toast.error(error.to_string()),
                }
            });
        }
    };

    let on_request_otp = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let username = reg_username.get().trim().to_string();
            let email = reg_email.get().trim().to_string();
            if username.is_empty() || email.is_empty() {
                toast.error("Please provide username and email");
                return;
            }

            let api = api.clone();
            spawn_local(async move {
                match api.register_request_otp(&RegisterRequestOtp { username, email }).await {
                    Ok(message) => {
                        toast.success(message.unwrap_or_else(|| "OTP sent to your email".into()));
                    }
                    Err(error) => toast.error(error.to_string()),
                }
            });
        }
    };

    let on_verify_otp = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            let username = reg_username.get().trim().to_string();
            let otp = reg_otp.get().trim().to_string();
            let password = reg_password.get();
            if username.is_empty() || otp.is_empty() || password.is_empty() {
                toast.error("Please provide username, OTP, and password");
                return;
            }

            let api = api.clone();
            spawn_local(async move {
                match api
                    .register_verify_otp(&RegisterVerifyOtp { username, otp, password })
                    .await
                {
                    Ok(message) => {
                        toast.success(
                            message.unwrap_or_else(|| "Registration completed, please login".into()),
                        );
                    }
                    Err(error) => toast.error(error.to_string()),
                }
            });
        }
    };

    view! {
        <div class="login-wrap">
            <div class="login-card">
                <h1 class="login-title">"MTS Finance Dashboard"</h1>
                <p class="login-subtitle">"Secure sign in for business operations"</p>

                <form class="page-grid" on:submit=on_login>
                    <div>
                        <label class="label" for="username">"Username"</label>
                        <input
                            class="input"
                            id="username"
                            maxlength="100"
                            autocomplete="username"
                            prop:value=username
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="label" for="password">"Password"</label>
                        <input
                            class="input"
                            id="password"
                            type="password"
                            minlength="6"
                            maxlength="100"
                            autocomplete="current-password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button class="btn btn-primary" type="submit" disabled=is_submitting>
                        {move || if is_submitting.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>

                <details>
                    <summary>"First-time setup (one-time)"</summary>
                    <form class="page-grid" on:submit=on_setup>
                        <div>
                            <label class="label" for="setup-username">"Setup Username"</label>
                            <input
                                class="input"
                                id="setup-username"
                                maxlength="100"
                                prop:value=setup_username
                                on:input=move |ev| set_setup_username.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="label" for="setup-password">"Setup Password"</label>
                            <input
                                class="input"
                                id="setup-password"
                                type="password"
                                minlength="6"
                                maxlength="100"
                                prop:value=setup_password
                                on:input=move |ev| set_setup_password.set(event_target_value(&ev))
                            />
                        </div>
                        <button class="btn btn-secondary" type="submit">
                            "Create Initial Credential"
                        </button>
                    </form>
                </details>

                <details>
                    <summary>"Register with email OTP"</summary>
                    <form class="page-grid" on:submit=on_request_otp>
                        <div>
                            <label class="label" for="reg-username">"Username"</label>
                            <input
                                class="input"
                                id="reg-username"
                                maxlength="100"
                                prop:value=reg_username
                                on:input=move |ev| set_reg_username.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="label" for="reg-email">"Email"</label>
                            <input
                                class="input"
                                id="reg-email"
                                type="email"
                                prop:value=reg_email
                                on:input=move |ev| set_reg_email.set(event_target_value(&ev))
                            />
                        </div>
                        <button class="btn btn-secondary" type="submit">"Send OTP"</button>
                    </form>
                    <form class="page-grid" on:submit=on_verify_otp>
                        <div>
                            <label class="label" for="reg-otp">"OTP Code"</label>
                            <input
                                class="input"
                                id="reg-otp"
                                maxlength="8"
                                prop:value=reg_otp
                                on:input=move |ev| set_reg_otp.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="label" for="reg-password">"Password"</label>
                            <input
                                class="input"
                                id="reg-password"
                                type="password"
                                minlength="6"
                                maxlength="100"
                                prop:value=reg_password
                                on:input=move |ev| set_reg_password.set(event_target_value(&ev))
                            />
                        </div>
                        <button class="btn btn-primary" type="submit">"Verify & Register"</button>
                    </form>
                </details>
            </div>
        </div>
    }
}

//! Admin console: platform-wide stats and management tables.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::stat_card::StatCard;
use crate::net::types::{Application, ApplicationStatus, Offer, Role, User};
use crate::state::auth::AuthState;
use crate::state::toasts::{self, ToastState};

/// Aggregates shown in the console header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct AdminStats {
    students: usize,
    recruiters: usize,
    admins: usize,
    offers: usize,
    applications: usize,
    pending: usize,
    accepted: usize,
}

fn compute_stats(users: &[User], offers: &[Offer], applications: &[Application]) -> AdminStats {
    AdminStats {
        students: users.iter().filter(|u| u.role == Role::Student).count(),
        recruiters: users.iter().filter(|u| u.role == Role::Entreprise).count(),
        admins: users.iter().filter(|u| u.role == Role::Admin).count(),
        offers: offers.len(),
        applications: applications.len(),
        pending: applications.iter().filter(|a| a.status == ApplicationStatus::Pending).count(),
        accepted: applications.iter().filter(|a| a.status == ApplicationStatus::Accepted).count(),
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let users = RwSignal::new(Vec::<User>::new());
    let offers = RwSignal::new(Vec::<Offer>::new());
    let applications = RwSignal::new(Vec::<Application>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api_users::list_users().await {
            Ok(items) => users.set(items),
            Err(err) => toasts::show_error(toasts, "Could not load users", err.to_string()),
        }
        match crate::net::api_offers::list().await {
            Ok(items) => offers.set(items),
            Err(err) => toasts::show_error(toasts, "Could not load offers", err.to_string()),
        }
        match crate::net::api_applications::list_all().await {
            Ok(items) => applications.set(items),
            Err(err) => {
                toasts::show_error(toasts, "Could not load applications", err.to_string());
            }
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = toasts;
    }

    let on_delete_user = move |user_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_users::delete_user(&user_id).await {
                Ok(()) => {
                    users.update(|items| items.retain(|u| u.id != user_id));
                    toasts::show_success(toasts, "User deleted");
                }
                Err(err) => toasts::show_error(toasts, "Could not delete the user", err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    };

    let on_delete_offer = move |offer_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_offers::remove(&offer_id).await {
                Ok(()) => {
                    offers.update(|items| items.retain(|o| o.id != offer_id));
                    toasts::show_success(toasts, "Offer deleted");
                }
                Err(err) => {
                    toasts::show_error(toasts, "Could not delete the offer", err.to_string());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = offer_id;
        }
    };

    let on_status_change = move |application_id: String, status: ApplicationStatus| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api_applications::set_status(&application_id, status).await {
                Ok(()) => {
                    applications.update(|items| {
                        if let Some(application) =
                            items.iter_mut().find(|a| a.id == application_id)
                        {
                            application.status = status;
                        }
                    });
                    toasts::show_success(toasts, "Application updated");
                }
                Err(err) => {
                    toasts::show_error(toasts, "Could not update the application", err.to_string());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (application_id, status);
        }
    };

    let is_admin = move || auth.get().user.map(|user| user.role) == Some(Role::Admin);

    view! {
        <Show
            when=is_admin
            fallback=move || view! { <Redirect path="/"/> }
        >
            <div class="admin-page">
                <h1>"Admin console"</h1>

                {move || {
                    let stats = compute_stats(&users.get(), &offers.get(), &applications.get());
                    view! {
                        <div class="dashboard-page__stats">
                            <StatCard title="Candidates" value=stats.students.to_string()/>
                            <StatCard title="Recruiters" value=stats.recruiters.to_string()/>
                            <StatCard title="Admins" value=stats.admins.to_string()/>
                            <StatCard title="Offers" value=stats.offers.to_string()/>
                            <StatCard
                                title="Applications"
                                value=stats.applications.to_string()
                                hint=format!(
                                    "{} pending, {} accepted",
                                    stats.pending,
                                    stats.accepted,
                                )
                            />
                        </div>
                    }
                }}

                <Show
                    when=move || !loading.get()
                    fallback=move || view! { <p class="admin-page__empty">"Loading..."</p> }
                >
                    <section class="admin-page__section">
                        <h2>"Users"</h2>
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    users
                                        .get()
                                        .into_iter()
                                        .map(|user| {
                                            let user_id = user.id.clone();
                                            view! {
                                                <tr>
                                                    <td>{user.name.clone()}</td>
                                                    <td>{user.email.clone()}</td>
                                                    <td>
                                                        <span class="badge badge--secondary">
                                                            {user.role.label()}
                                                        </span>
                                                    </td>
                                                    <td>
                                                        <button
                                                            class="btn btn--danger btn--small"
                                                            on:click=move |_| on_delete_user(user_id.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </section>

                    <section class="admin-page__section">
                        <h2>"Offers"</h2>
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Title"</th>
                                    <th>"Location"</th>
                                    <th>"Recruiter"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    offers
                                        .get()
                                        .into_iter()
                                        .map(|offer| {
                                            let offer_id = offer.id.clone();
                                            view! {
                                                <tr>
                                                    <td>{offer.title.clone()}</td>
                                                    <td>{offer.localisation.clone()}</td>
                                                    <td>
                                                        {offer
                                                            .author
                                                            .as_ref()
                                                            .map(|a| a.name.clone())
                                                            .unwrap_or_default()}
                                                    </td>
                                                    <td>
                                                        <button
                                                            class="btn btn--danger btn--small"
                                                            on:click=move |_| on_delete_offer(offer_id.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </section>

                    <section class="admin-page__section">
                        <h2>"Applications"</h2>
                        <table class="admin-table">
                            <thead>
                                <tr>
                                    <th>"Candidate"</th>
                                    <th>"Offer"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    applications
                                        .get()
                                        .into_iter()
                                        .map(|application| {
                                            let current = application.status;
                                            let application_id = application.id.clone();
                                            view! {
                                                <tr>
                                                    <td>
                                                        {application
                                                            .applicant
                                                            .as_ref()
                                                            .map(|u| u.name.clone())
                                                            .unwrap_or_default()}
                                                    </td>
                                                    <td>
                                                        {application
                                                            .offer
                                                            .as_ref()
                                                            .map(|o| o.title.clone())
                                                            .unwrap_or_default()}
                                                    </td>
                                                    <td>
                                                        <span class=format!(
                                                            "badge badge--status-{}",
                                                            current.as_str(),
                                                        )>{current.label()}</span>
                                                    </td>
                                                    <td class="application-card__actions">
                                                        {ApplicationStatus::ALL
                                                            .into_iter()
                                                            .filter(|status| *status != current)
                                                            .map(|status| {
                                                                let application_id = application_id.clone();
                                                                view! {
                                                                    <button
                                                                        class="btn btn--small"
                                                                        on:click=move |_| on_status_change(
                                                                            application_id.clone(),
                                                                            status,
                                                                        )
                                                                    >
                                                                        {status.label()}
                                                                    </button>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </section>
                </Show>
            </div>
        </Show>
    }
}

use chrono::Datelike;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::catalog::Catalog;
use crate::components::{
    course_card::CourseCard,
    hero::Hero,
    nav::Nav,
    reveal::Reveal,
};
use crate::config::{FADE_OUT_MS, FRAME_TICK_MS};
use crate::notify;
use crate::pages::styles::LANDING_CSS;
use crate::state::action::SIGN_UP_MESSAGE;
use crate::state::reveal::RevealGroup;
use crate::state::ViewState;
use crate::timer::TaskQueue;

pub enum LearnHubMsg {
    ToggleMenu,
    Navigate { href: String },
    Filter { category: String },
    CardsSettle { generation: u64 },
    CardsCollapse { generation: u64 },
    CardRevealed { index: usize },
    SignUp,
}

/// Landing page controller: owns the view state and every pending filter timer.
pub struct LearnHub {
    catalog: Catalog,
    categories: Vec<String>,
    view: ViewState,
    filter_tasks: TaskQueue,
}

fn section_top(id: &str) -> Option<f64> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    let element = element.dyn_into::<HtmlElement>().ok()?;
    Some(f64::from(element.offset_top()))
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

impl Component for LearnHub {
    type Message = LearnHubMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let catalog = Catalog::bundled();
        let categories = catalog.categories();
        let view = ViewState::new(catalog.course_categories());
        info!(
            "Loaded {} courses in {} categories",
            catalog.courses.len(),
            categories.len().saturating_sub(1)
        );

        Self {
            catalog,
            categories,
            view,
            filter_tasks: TaskQueue::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LearnHubMsg::ToggleMenu => {
                self.view.toggle_menu();
                debug!("Mobile menu open: {}", self.view.navigation.menu_open());
                true
            }
            LearnHubMsg::Navigate { href } => match self.view.navigate(&href, section_top) {
                Some(top) => {
                    debug!("Scrolling to {:?} at {}", self.view.navigation.active_link(), top);
                    smooth_scroll_to(top);
                    true
                }
                None => {
                    debug!("No section for {}", href);
                    false
                }
            },
            LearnHubMsg::Filter { category } => {
                let generation = self.view.filter(&category);
                info!("Filtering courses by {}", category);

                self.filter_tasks.cancel_all();
                let link = ctx.link().clone();
                self.filter_tasks.schedule(FRAME_TICK_MS, move || {
                    link.send_message(LearnHubMsg::CardsSettle { generation })
                });
                let link = ctx.link().clone();
                self.filter_tasks.schedule(FADE_OUT_MS, move || {
                    link.send_message(LearnHubMsg::CardsCollapse { generation })
                });
                true
            }
            LearnHubMsg::CardsSettle { generation } => self.view.settle(generation),
            LearnHubMsg::CardsCollapse { generation } => {
                let changed = self.view.collapse(generation);
                if changed {
                    debug!("{} courses visible", self.view.visible_count());
                }
                changed
            }
            LearnHubMsg::CardRevealed { index } => self.view.reveal_card(index),
            LearnHubMsg::SignUp => {
                notify::alert(SIGN_UP_MESSAGE);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_toggle = link.callback(|_: ()| LearnHubMsg::ToggleMenu);
        let on_navigate = link.callback(|href: String| LearnHubMsg::Navigate { href });
        let on_sign_up = link.callback(|_: ()| LearnHubMsg::SignUp);
        let on_revealed = link.callback(|index: usize| LearnHubMsg::CardRevealed { index });

        html! {
            <div class="landing-page">
                <style>{ LANDING_CSS }</style>
                <Nav
                    state={self.view.navigation.clone()}
                    on_toggle={on_toggle}
                    on_navigate={on_navigate.clone()}
                    on_sign_up={on_sign_up.clone()}
                />
                <Hero on_sign_up={on_sign_up.clone()} on_navigate={on_navigate} />

                <section class="courses" id="courses">
                    <h2 class="section-title">{"Popular Courses"}</h2>
                    <div class="course-filters">
                        { for self.categories.iter().map(|category| {
                            let active = self.view.filter.is_active(category);
                            let onclick = {
                                let category = category.clone();
                                link.callback(move |_: MouseEvent| LearnHubMsg::Filter {
                                    category: category.clone(),
                                })
                            };
                            html! {
                                <button class={classes!("filter-btn", active.then_some("active"))} {onclick}>
                                    { category }
                                </button>
                            }
                        }) }
                    </div>
                    <div class="course-grid">
                        { for self.catalog.courses.iter().zip(self.view.cards()).enumerate().map(|(index, (course, card))| {
                            html! {
                                <CourseCard
                                    key={index}
                                    course={course.clone()}
                                    {index}
                                    style={card.style()}
                                    on_revealed={on_revealed.clone()}
                                />
                            }
                        }) }
                    </div>
                </section>

                <section class="features" id="features">
                    <h2 class="section-title">{"Why LearnHub"}</h2>
                    <div class="feature-grid">
                        { for self.catalog.features.iter().enumerate().map(|(index, feature)| html! {
                            <Reveal group={RevealGroup::FeatureCards} {index} class={classes!("feature-card")}>
                                <div class="feature-icon">{ &feature.icon }</div>
                                <h3>{ &feature.title }</h3>
                                <p>{ &feature.description }</p>
                            </Reveal>
                        }) }
                    </div>
                </section>

                <section class="about" id="about">
                    <div class="stats">
                        { for self.catalog.stats.iter().enumerate().map(|(index, stat)| html! {
                            <Reveal group={RevealGroup::StatItems} {index} class={classes!("stat-item")}>
                                <h3>{ &stat.value }</h3>
                                <p>{ &stat.label }</p>
                            </Reveal>
                        }) }
                    </div>
                    <div class="cta">
                        <h2>{"Start Learning Today"}</h2>
                        <p>{"Join thousands of learners building their future with LearnHub."}</p>
                        <button class="secondary-btn" onclick={link.callback(|_: MouseEvent| LearnHubMsg::SignUp)}>
                            {"Create Free Account"}
                        </button>
                    </div>
                </section>

                <footer class="footer">
                    <p>{ format!("© {} LearnHub by Fazal Shaikh. All rights reserved.", chrono::Local::now().year()) }</p>
                </footer>
            </div>
        }
    }
}

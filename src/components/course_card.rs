use yew::prelude::*;

use crate::catalog::Course;
use crate::components::action_button::ActionButtonView;
use crate::components::reveal::use_reveal;
use crate::state::action::ActionKind;
use crate::state::reveal::RevealGroup;

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub course: Course,
    pub index: usize,
    /// Filter/reveal style owned by the page controller.
    pub style: AttrValue,
    pub on_revealed: Callback<usize>,
}

#[function_component(CourseCard)]
pub fn course_card(props: &CourseCardProps) -> Html {
    let node = use_node_ref();
    {
        let index = props.index;
        let on_revealed = props.on_revealed.clone();
        use_reveal(
            node.clone(),
            RevealGroup::CourseCards,
            index,
            Callback::from(move |_| on_revealed.emit(index)),
        );
    }

    let course = &props.course;
    let title: AttrValue = course.title.clone().into();

    html! {
        <div ref={node} class="course-card" style={props.style.clone()}>
            <div class="course-header">
                <span class="course-category">{ &course.category }</span>
                <span class="course-level">{ &course.level }</span>
            </div>
            <h3>{ &course.title }</h3>
            <p class="course-description">{ &course.description }</p>
            <div class="course-meta">
                <span>{ format!("👤 {}", course.instructor) }</span>
                <span>{ format!("⏱ {}", course.duration) }</span>
                <span>{ format!("⭐ {:.1}", course.rating) }</span>
            </div>
            <div class="course-footer">
                <span class="course-price">{ &course.price }</span>
                <div class="course-actions">
                    <ActionButtonView kind={ActionKind::Preview} course_title={title.clone()} />
                    <ActionButtonView kind={ActionKind::Enroll} course_title={title} />
                </div>
            </div>
        </div>
    }
}

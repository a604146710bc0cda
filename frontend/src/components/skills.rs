use yew::prelude::*;

use crate::data::{Skill, SKILL_GROUPS};

fn skill_card(skill: &Skill) -> Html {
    let initial = skill.name.chars().next().map(String::from).unwrap_or_default();
    html! {
        <div class="group relative rounded-xl p-4 border border-[var(--border)] bg-[var(--surface)] transition-transform duration-200 hover:scale-105">
            <div class="flex items-center gap-3">
                <div class="w-12 h-12 flex-shrink-0 rounded-lg flex items-center justify-center bg-[var(--surface-alt)]">
                    <img src={skill.icon} alt={skill.name} title={initial} class="w-8 h-8 object-contain" loading="lazy" />
                </div>
                <div class="flex flex-col gap-1">
                    <span class="font-semibold">{ skill.name }</span>
                    <span class={classes!("w-fit", "rounded-full", "border", "px-2", "py-0.5", "text-xs", skill.level.badge_class())}>
                        { skill.level.label() }
                    </span>
                </div>
            </div>
        </div>
    }
}

/// Skill grid grouped by area.
#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id="skills" class="container mx-auto px-6 py-20">
            <h2 class="text-3xl md:text-5xl font-bold mb-12">{ "SKILLS" }</h2>
            <div class="space-y-10">
                { for SKILL_GROUPS.iter().map(|group| html! {
                    <div key={group.title}>
                        <h3 class="text-xl font-semibold mb-4 text-[var(--muted)]">{ group.title }</h3>
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                            { for group.skills.iter().map(skill_card) }
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

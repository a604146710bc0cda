use yew::prelude::*;

use crate::data::{review_rows, Review};

fn review_card(review: &Review) -> Html {
    html! {
        <figure class="relative w-72 md:w-80 h-40 md:h-48 mx-4 my-5 shrink-0 overflow-hidden rounded-xl p-6 border border-[var(--border)] bg-[var(--surface)]">
            <div class="flex flex-row items-center gap-3 -mt-3">
                <img src={review.img} alt={format!("{} icon", review.name)} width="32" height="32" class="rounded-full" />
                <div class="flex flex-col">
                    <figcaption class="text-xs md:text-sm font-medium">{ review.name }</figcaption>
                    <p class="text-xs text-[var(--muted)]">{ review.username }</p>
                </div>
            </div>
            <blockquote class="mt-2 text-xs leading-relaxed">{ review.body }</blockquote>
        </figure>
    }
}

#[derive(Properties, PartialEq)]
struct MarqueeRowProps {
    reviews: &'static [Review],
    #[prop_or(false)]
    reverse: bool,
}

/// The row is rendered twice so the CSS scroll loops without a gap.
#[function_component(MarqueeRow)]
fn marquee_row(props: &MarqueeRowProps) -> Html {
    let track = classes!(
        "flex",
        "w-max",
        "hover:[animation-play-state:paused]",
        if props.reverse {
            "animate-[marquee_40s_linear_infinite_reverse]"
        } else {
            "animate-[marquee_40s_linear_infinite]"
        }
    );
    html! {
        <div class="overflow-hidden w-full">
            <div class={track}>
                { for props.reviews.iter().chain(props.reviews.iter()).map(review_card) }
            </div>
        </div>
    }
}

/// Two marquee rows of service cards scrolling in opposite directions.
#[function_component(Services)]
pub fn services() -> Html {
    let (first, second) = review_rows();
    html! {
        <section id="services" class="relative flex w-full flex-col items-center justify-center gap-8 overflow-hidden py-16">
            <MarqueeRow reviews={first} />
            <MarqueeRow reviews={second} reverse={true} />
        </section>
    }
}

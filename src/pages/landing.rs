//! Landing Page
//!
//! Anonymous marketing screen with links into login and registration.

use leptos::*;
use leptos_router::*;

/// Public landing page
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            // Header
            <header class="border-b border-gray-700 bg-gray-800">
                <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                    <div class="flex items-center space-x-2">
                        <span class="text-2xl">"📍"</span>
                        <h1 class="text-2xl font-bold">"KritPokeMap"</h1>
                    </div>
                    <div class="flex space-x-3">
                        <A
                            href="/login"
                            class="px-4 py-2 rounded-lg border border-gray-600 hover:bg-gray-700 transition-colors"
                        >
                            "Login"
                        </A>
                        <A
                            href="/register"
                            class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 font-medium transition-colors"
                        >
                            "Subscribe Now"
                        </A>
                    </div>
                </div>
            </header>

            // Hero
            <section class="container mx-auto px-4 py-20 text-center">
                <h2 class="text-5xl font-bold mb-6">"Catch 'Em All in Kanchanaburi!"</h2>
                <p class="text-xl mb-8 text-gray-400 max-w-2xl mx-auto">
                    "Join the ultimate Pokémon tracking community in Kanchanaburi. "
                    "Discover real-time Pokémon locations shared by trainers like you."
                </p>
                <A
                    href="/register"
                    class="inline-block px-8 py-4 rounded-lg bg-primary-600 hover:bg-primary-700
                           text-lg font-semibold transition-colors"
                >
                    "Start Your Adventure"
                </A>
            </section>

            // Features
            <section class="container mx-auto px-4 py-16">
                <h3 class="text-3xl font-bold text-center mb-12">"Why Choose KritPokeMap?"</h3>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    <FeatureCard
                        icon="🗺️"
                        title="Real-time Map"
                        text="Track Pokémon locations in Kanchanaburi with live updates from the community."
                    />
                    <FeatureCard
                        icon="👥"
                        title="Community Driven"
                        text="Every sighting comes from a real trainer out in the field."
                    />
                    <FeatureCard
                        icon="💬"
                        title="Live Chat"
                        text="Coordinate hunts and share tips in the shared trainer chat."
                    />
                    <FeatureCard
                        icon="✅"
                        title="Verified Reports"
                        text="Moderators verify sightings so you never chase a ghost."
                    />
                </div>
            </section>

            <footer class="border-t border-gray-700 py-8 text-center text-gray-500 text-sm">
                "KritPokeMap • Kanchanaburi Province"
            </footer>
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 p-6 rounded-xl text-center border border-gray-700 hover:border-gray-600 transition-colors">
            <div class="text-4xl mb-4">{icon}</div>
            <h4 class="text-xl font-bold mb-2">{title}</h4>
            <p class="text-gray-400">{text}</p>
        </div>
    }
}

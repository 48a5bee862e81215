use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::blog_list::BlogList;
use crate::components::contact_form::ContactForm;
use crate::components::faq_section::FaqSection;
use crate::components::scroll_indicator::ScrollIndicator;
use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: Config,
}

struct Feature {
    title: &'static str,
    description: &'static str,
    color: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Rapid Absorption",
        description: "SigRid's proprietary formula ensures the fastest nicotine absorption \
                      rate available in the market.",
        color: "#0d9488",
    },
    Feature {
        title: "Quick Craving Relief",
        description: "Experience immediate satisfaction with our fast-acting formula \
                      designed to address cravings instantly.",
        color: "#059669",
    },
    Feature {
        title: "Superior NRT Performance",
        description: "Delivers nicotine more rapidly than any other Nicotine Replacement \
                      Therapy on the market today.",
        color: "#d97706",
    },
    Feature {
        title: "Withdrawal Management",
        description: "Effectively manages uncomfortable withdrawal symptoms to keep you \
                      comfortable throughout your journey.",
        color: "#e11d48",
    },
];

const HOW_TO_USE_STEPS: [(&str, &str); 4] = [
    (
        "Prepare the Spray",
        "Before using SigRid for the first time, prime the spray by pumping it several \
         times until a fine mist appears. Hold the bottle upright with your thumb at the \
         bottom and your index and middle fingers on either side of the nozzle.",
    ),
    (
        "Position Correctly",
        "Tilt your head back slightly and insert the tip of the bottle into one nostril, \
         pointing toward the back of your nose, not upward. Block the other nostril with \
         your finger.",
    ),
    (
        "Apply One Dose",
        "Breathe in gently through your nose while pressing firmly on the pump to release \
         one spray. Wait a few minutes before using in the other nostril if needed.",
    ),
    (
        "Follow Dosage Guidelines",
        "Use 1-2 sprays per nostril when you feel a craving coming on, with a maximum of \
         5 doses per hour and 40 doses per day. Gradually reduce usage over the 12-week \
         program.",
    ),
];

const PRO_TIPS: [&str; 4] = [
    "Avoid sniffing, swallowing, or inhaling deeply while spraying",
    "Use when cravings start, not after they're intense",
    "Combine with behavioral strategies for best results",
    "Store at room temperature away from direct sunlight",
];

const METRICS: [(&str, &str, &str); 4] = [
    ("8M+", "Deaths from Tobacco Use Per Year", "#0d9488"),
    ("100K+", "Deaths from Secondhand Smoke", "#059669"),
    ("20+", "Types of Cancer Linked to Smoking", "#d97706"),
    ("$300B+", "Annual Healthcare Costs", "#d97706"),
];

const TESTIMONIALS: [(&str, u32, &str); 3] = [
    (
        "Devansh Chaudhary",
        5,
        "Thanks to Sigrid, I finally managed to kick the smoking habit for good.",
    ),
    (
        "Akshay Tyagi",
        4,
        "I have been using Sigrid for 2 weeks now, and I have almost stopped smoking \
         cigarettes. Whenever I feel the need to smoke, I use the spray, and the cravings \
         go away.",
    ),
    (
        "Isha Lal Chandani",
        4,
        "I started smoking as my work got very stressful. Thanks to Sigrid, I no longer \
         have to be awkward in my workplace.",
    ),
];

fn smooth_scroll_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(section) = document.get_element_by_id(id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    })
}

fn star_row(count: u32) -> String {
    "★".repeat(count as usize)
}

fn stars(count: u32) -> Html {
    let row = star_row(count);
    html! { <div class="testimonial-stars">{ row }</div> }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let video_playing = use_state(|| false);

    let play_video = {
        let video_playing = video_playing.clone();
        Callback::from(move |_: MouseEvent| video_playing.set(true))
    };

    html! {
        <main class="home">
            <section id="hero" class="hero-section">
                <div class="hero-grid">
                    <div class="hero-copy">
                        <span class="section-tag">{"Redefining Smoking Cessation"}</span>
                        <h1>
                            <span>{"Sigrid"}</span>
                            <span class="accent">{"Quit Smoking For Good"}</span>
                        </h1>
                        <p>{"Nicotine Nasal Spray BP 20ml - The most effective way to manage cravings."}</p>
                        <button class="hero-cta" onclick={smooth_scroll_to("about-us")}>
                            {"Learn More →"}
                        </button>
                    </div>
                    <div class="hero-image">
                        <img src="/assets/EntryPic.png" alt="SigRid Product" />
                    </div>
                </div>
            </section>

            <section id="about-us" class="about-section">
                <div class="section-intro">
                    <span class="section-tag">{"Our Story"}</span>
                    <h2>{"About "}<span class="accent">{"SigRid"}</span></h2>
                    <p>{"A new chapter, free from nicotine addiction"}</p>
                </div>

                <div class="about-grid">
                    <div class="about-visual">
                        <img src="/assets/AboutUsPicOne.png" alt="SigRid Team" />
                        <div class="about-card">
                            <h3>{"Our Vision"}</h3>
                            <p>
                                {"At SigRid, we believe quitting nicotine is not only about \
                                  stopping a habit — it's about helping people heal their \
                                  health, their relationships, and their lives."}
                            </p>
                        </div>
                    </div>
                    <div class="about-copy">
                        <p>
                            {"Our first product — the Nicotine Nasal Spray — is specially \
                              designed to give quick relief from cravings. Research shows that \
                              fast-acting support helps people avoid relapse and stay committed \
                              to quitting. Our goal is to provide healthcare professionals with \
                              effective tools that make it easier for patients to break free \
                              from addiction."}
                        </p>
                        <p>
                            {"We are proud to work alongside India's healthcare community to \
                              build a healthier, stronger, nicotine-free future. Together, we \
                              can bring real change — one patient, one family, and one success \
                              story at a time."}
                        </p>
                    </div>
                </div>

                <div class="about-grid reversed">
                    <div class="about-copy">
                        <p>
                            {"At SigRid, we believe nicotine addiction is not just a health \
                              problem — it affects a person's mind, family, relationships, and \
                              overall quality of life. In India, according to the Global Adult \
                              Tobacco Survey (GATS-2), around 28.6% of adults use tobacco, and \
                              many struggle silently with the harmful effects of nicotine."}
                        </p>
                        <p>
                            {"Along with serious health risks like cancer, heart disease, and \
                              lung problems, nicotine addiction often causes emotional stress, \
                              family issues, financial problems, and mental health challenges \
                              like anxiety and depression."}
                        </p>
                        <p>
                            {"Doctors, nurses, and healthcare workers across India see these \
                              effects every day. We started SigRid because we saw an urgent \
                              need for better, faster solutions to help patients quit nicotine \
                              successfully."}
                        </p>
                    </div>
                    <div class="about-visual">
                        <img src="/assets/AboutUsPicTwo.png" alt="SigRid Mission" />
                        <div class="about-card">
                            <h3>{"Our Mission"}</h3>
                            <p>
                                {"To provide effective tools that make it easier for patients \
                                  to break free from nicotine addiction and reclaim their \
                                  lives."}
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="key-metrics" class="metrics-section">
                <div class="metrics-grid">
                    <div class="metrics-copy">
                        <span class="section-tag">{"Key Statistics"}</span>
                        <h2>{"The Urgency of Our "}<span class="accent">{"Mission"}</span></h2>
                        <p>
                            {"Tracking key metrics helps us measure the urgency of our mission \
                              in fighting nicotine addiction and helping people quit smoking \
                              for a healthier future. Every day, thousands of lives are lost \
                              to tobacco-related illnesses."}
                        </p>
                        <div class="metric-cards">
                            { for METRICS.iter().map(|(value, caption, color)| html! {
                                <div class="metric-card" style={format!("border-left-color: {color};")}>
                                    <h3 style={format!("color: {color};")}>{ *value }</h3>
                                    <p>{ *caption }</p>
                                </div>
                            }) }
                        </div>
                        <a
                            class="metrics-link"
                            href="https://www.who.int/news-room/fact-sheets/detail/tobacco"
                            target="_blank"
                            rel="noopener"
                        >
                            {"View All Metrics ›"}
                        </a>
                    </div>
                    <div class="metrics-visual">
                        <img src="/assets/KeyMetrics.jpg" alt="Smoking Health Impact" />
                        <div class="about-card">
                            <h3>{"Did You Know?"}</h3>
                            <p>
                                {"Quitting smoking is one of the most important steps you can \
                                  take for your health. Within just 20 minutes of quitting, \
                                  your heart rate drops to a normal level."}
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="features" class="features-section">
                <div class="section-intro">
                    <span class="section-tag">{"Why Choose SigRid?"}</span>
                    <h2>{"Features That Make "}<span class="accent">{"The Difference"}</span></h2>
                    <p>
                        {"Our innovative approach to smoking cessation combines cutting-edge \
                          technology with deep understanding of addiction psychology."}
                    </p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class="feature-icon" style={format!("background: {};", feature.color)}></div>
                            <h3>{ feature.title }</h3>
                            <p>{ feature.description }</p>
                        </div>
                    }) }
                </div>
                <div class="feature-banner">
                    <div class="feature-banner-copy">
                        <h3>{"Ready to Experience the SigRid Difference?"}</h3>
                        <p>
                            {"Join thousands of successful quitters who have transformed their \
                              lives with our revolutionary product."}
                        </p>
                        <ul>
                            <li>{"Clinically proven results"}</li>
                            <li>{"Fast-acting formula"}</li>
                            <li>{"Personalized support"}</li>
                            <li>{"Money-back guarantee"}</li>
                        </ul>
                    </div>
                    <img src="/assets/ProductPic.png" alt="SigRid Product" />
                </div>
            </section>

            <section id="how-to-use" class="how-to-section">
                <div class="section-intro">
                    <span class="section-tag">{"Usage Instructions"}</span>
                    <h2>{"How to "}<span class="accent">{"Use SigRid"}</span>{" Effectively"}</h2>
                    <p>
                        {"Follow these simple steps to maximize the effectiveness of SigRid \
                          and support your journey to becoming smoke-free."}
                    </p>
                </div>
                <div class="how-to-grid">
                    <div class="how-to-steps">
                        { for HOW_TO_USE_STEPS.iter().enumerate().map(|(index, (title, body))| html! {
                            <div class="how-to-step">
                                <div class="step-number">{ index + 1 }</div>
                                <div>
                                    <h3>{ *title }</h3>
                                    <p>{ *body }</p>
                                </div>
                            </div>
                        }) }
                        <div class="pro-tips">
                            <h3>{"Pro Tips for Best Results"}</h3>
                            <ul>
                                { for PRO_TIPS.iter().map(|tip| html! { <li>{ *tip }</li> }) }
                            </ul>
                        </div>
                    </div>
                    <div class="how-to-video">
                        <h3>{"Video Tutorial"}</h3>
                        <div class="video-frame">
                            {
                                if *video_playing {
                                    html! {
                                        <iframe
                                            src="https://www.youtube.com/embed/iAO-Bxvctqs?autoplay=1"
                                            title="SigRid Tutorial Video"
                                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                            allowfullscreen=true
                                        />
                                    }
                                } else {
                                    html! {
                                        <>
                                            <img src="/assets/ThumbNail.png" alt="Video thumbnail" />
                                            <button class="video-play" onclick={play_video}>{"▶"}</button>
                                        </>
                                    }
                                }
                            }
                        </div>
                        <div class="video-note">
                            <h4>{"Why Watch The Tutorial?"}</h4>
                            <p>
                                {"Our video tutorial provides a detailed visual guide to using \
                                  SigRid correctly. Proper technique ensures maximum \
                                  effectiveness and comfort during use."}
                            </p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="testimonials" class="testimonials-section">
                <div class="section-intro">
                    <span class="section-tag">{"Success Stories"}</span>
                    <h2>{"Testimonials"}</h2>
                    <p>
                        {"Hear from people who have successfully quit smoking with SigRid and \
                          transformed their lives for the better."}
                    </p>
                </div>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|(author, rating, quote)| html! {
                        <div class="testimonial-card">
                            <div class="testimonial-header">
                                <h4>{ *author }</h4>
                            </div>
                            <div class="testimonial-body">
                                { stars(*rating) }
                                <p>{ format!("\"{}\"", quote) }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <BlogList config={props.config} />

            <FaqSection />

            <section id="contact" class="contact-section">
                <div class="section-intro">
                    <span class="section-tag">{"Get In Touch"}</span>
                    <h2>{"We're Here To "}<span class="accent">{"Support Your Journey"}</span></h2>
                    <p>
                        {"Have questions about SigRid or need support with your smoking \
                          cessation journey? Our team of experts is ready to help you every \
                          step of the way."}
                    </p>
                </div>
                <div class="contact-grid">
                    <div class="contact-side">
                        <div class="contact-map">
                            <iframe
                                src="https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3484.4377171868846!2d75.7252501!3d29.151770900000002!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x391233260346ecf1%3A0xe584bd3122f2b703!2s1645%2C%20Railway%20Rd%2C%20Mehta%20Nagar%2C%20Hisar%2C%20Haryana%20125011!5e0!3m2!1sen!2sin!4v1745952971343!5m2!1sen!2sin"
                                title="SigRid Location"
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                            />
                        </div>
                        <div class="contact-info">
                            <div class="contact-info-item">
                                <h4>{"Address"}</h4>
                                <p>{"1645, Railway Rd, Mehta Nagar, Hisar, Haryana 125011"}</p>
                            </div>
                            <div class="contact-info-item">
                                <h4>{"Call Us"}</h4>
                                <p>{"+91 7027742069"}</p>
                            </div>
                            <div class="contact-info-item">
                                <h4>{"Email Us"}</h4>
                                <p>{"info@sigrid.in"}</p>
                            </div>
                        </div>
                    </div>
                    <div class="contact-main">
                        <ContactForm config={props.config} />
                    </div>
                </div>
            </section>

            <ScrollIndicator />

            <footer class="site-footer">
                <h3>{"The fresh start you've been waiting for."}</h3>
                <div class="footer-grid">
                    <div class="footer-links">
                        <h4>{"Useful Links"}</h4>
                        <a href="#hero">{"Home"}</a>
                        <a href="#about-us">{"About Us"}</a>
                        <a href="#how-to-use">{"How to Use"}</a>
                    </div>
                    <div class="footer-links">
                        <h4>{"Help"}</h4>
                        <a href="#contact">{"Contact"}</a>
                        <a href="#faq">{"FAQ's"}</a>
                    </div>
                    <p class="footer-blurb">
                        {"SigRid delivers the nicotine in lower quantities than you generally \
                          get from cigarettes or other tobacco products. Your body gradually \
                          adapts to lower levels of nicotine until you no longer need any, \
                          thus helping you quit."}
                    </p>
                </div>
                <p class="footer-copyright">{"© 2025 BY SIGRID"}</p>
            </footer>

            <style>
                {r#"
                .home {
                    background: #ffffff;
                    color: #0f172a;
                }

                .section-tag {
                    display: inline-block;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: #f0fdfa;
                    border: 1px solid #ccfbf1;
                    color: #0d9488;
                    font-size: 0.9rem;
                    font-weight: 500;
                    margin-bottom: 1rem;
                }

                .section-intro {
                    text-align: center;
                    max-width: 46rem;
                    margin: 0 auto 4rem;
                }

                .section-intro h2 {
                    font-size: 2.75rem;
                    margin: 0.5rem 0 1rem;
                }

                .section-intro p {
                    font-size: 1.1rem;
                    color: #475569;
                }

                .accent {
                    color: #0d9488;
                }

                .hero-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    background: linear-gradient(to right, rgba(240, 253, 250, 0.9), rgba(255, 255, 255, 0.8));
                    padding: 5rem 2rem;
                }

                .hero-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-copy h1 {
                    font-size: 4rem;
                    line-height: 1.1;
                    margin: 1rem 0;
                }

                .hero-copy h1 span {
                    display: block;
                }

                .hero-copy p {
                    font-size: 1.4rem;
                    color: #475569;
                }

                .hero-cta {
                    margin-top: 2rem;
                    padding: 1.25rem 2rem;
                    font-size: 1.1rem;
                    color: #ffffff;
                    background: #0d9488;
                    border: none;
                    border-radius: 10px;
                    cursor: pointer;
                }

                .hero-cta:hover {
                    background: #0f766e;
                }

                .hero-image img {
                    width: 100%;
                    border-radius: 16px;
                    box-shadow: 0 16px 40px rgba(15, 23, 42, 0.15);
                }

                .about-section,
                .features-section,
                .how-to-section,
                .testimonials-section,
                .contact-section {
                    padding: 6rem 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .about-grid,
                .metrics-grid,
                .how-to-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    margin-bottom: 5rem;
                }

                .about-copy p {
                    font-size: 1.1rem;
                    color: #334155;
                    line-height: 1.8;
                    margin-bottom: 1.25rem;
                }

                .about-visual {
                    position: relative;
                }

                .about-visual img,
                .metrics-visual img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 16px;
                    box-shadow: 0 16px 40px rgba(15, 23, 42, 0.15);
                }

                .about-card {
                    position: absolute;
                    left: 1.5rem;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    background: rgba(255, 255, 255, 0.92);
                    backdrop-filter: blur(4px);
                    border-radius: 12px;
                    padding: 1.25rem;
                    box-shadow: 0 8px 24px rgba(15, 23, 42, 0.2);
                }

                .about-card h3 {
                    margin: 0 0 0.5rem;
                }

                .about-card p {
                    margin: 0;
                    color: #334155;
                }

                .metrics-section {
                    background: linear-gradient(to bottom, #ffffff, #f0fdfa);
                    padding: 6rem 2rem;
                }

                .metrics-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .metrics-visual {
                    position: relative;
                }

                .metrics-copy > p {
                    color: #475569;
                    font-size: 1.1rem;
                    margin-bottom: 2rem;
                }

                .metric-cards {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                    margin-bottom: 2rem;
                }

                .metric-card {
                    background: #ffffff;
                    border-left: 4px solid #0d9488;
                    border-radius: 10px;
                    padding: 1.25rem;
                    box-shadow: 0 4px 14px rgba(15, 23, 42, 0.08);
                }

                .metric-card h3 {
                    margin: 0 0 0.25rem;
                    font-size: 1.8rem;
                }

                .metric-card p {
                    margin: 0;
                    font-size: 0.9rem;
                    color: #475569;
                }

                .metrics-link {
                    display: inline-block;
                    background: #0d9488;
                    color: #ffffff;
                    padding: 0.75rem 1.5rem;
                    border-radius: 10px;
                    text-decoration: none;
                }

                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                    margin-bottom: 5rem;
                }

                .feature-card {
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    border-radius: 14px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 14px rgba(15, 23, 42, 0.08);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .feature-card:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 12px 30px rgba(15, 23, 42, 0.12);
                }

                .feature-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                }

                .feature-banner {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    border-radius: 16px;
                    padding: 3.5rem;
                    color: #ffffff;
                    background: linear-gradient(to right, rgba(13, 148, 136, 0.95), rgba(19, 78, 74, 0.9));
                    box-shadow: 0 16px 40px rgba(15, 23, 42, 0.2);
                }

                .feature-banner h3 {
                    font-size: 1.9rem;
                    margin: 0 0 1rem;
                }

                .feature-banner ul {
                    list-style: none;
                    padding: 0;
                    margin: 1.5rem 0 0;
                }

                .feature-banner li {
                    padding: 0.4rem 0 0.4rem 1.75rem;
                    position: relative;
                }

                .feature-banner li::before {
                    content: '✓';
                    position: absolute;
                    left: 0;
                    color: #5eead4;
                }

                .feature-banner img {
                    max-width: 280px;
                    margin: 0 auto;
                    filter: drop-shadow(0 16px 24px rgba(0, 0, 0, 0.35));
                }

                .how-to-grid {
                    align-items: start;
                }

                .how-to-step {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 2.5rem;
                }

                .step-number {
                    flex-shrink: 0;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: #ccfbf1;
                    color: #0d9488;
                    font-weight: 600;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-top: 0.25rem;
                }

                .how-to-step h3 {
                    margin: 0 0 0.5rem;
                }

                .how-to-step p {
                    margin: 0;
                    color: #475569;
                    line-height: 1.7;
                }

                .pro-tips {
                    background: #eef2ff;
                    border: 1px solid #e0e7ff;
                    border-radius: 14px;
                    padding: 2rem;
                }

                .pro-tips h3 {
                    color: #312e81;
                    margin: 0 0 1rem;
                }

                .pro-tips ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .pro-tips li {
                    color: #3730a3;
                    padding: 0.5rem 0 0.5rem 1.75rem;
                    position: relative;
                }

                .pro-tips li::before {
                    content: '✓';
                    position: absolute;
                    left: 0;
                    color: #4f46e5;
                }

                .how-to-video h3 {
                    font-size: 1.6rem;
                }

                .video-frame {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    border-radius: 14px;
                    overflow: hidden;
                    background: #1e293b;
                    box-shadow: 0 12px 30px rgba(15, 23, 42, 0.2);
                    margin-bottom: 2rem;
                }

                .video-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.7;
                }

                .video-frame iframe {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    border: none;
                }

                .video-play {
                    position: absolute;
                    inset: 0;
                    margin: auto;
                    width: 5rem;
                    height: 5rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(13, 148, 136, 0.9);
                    color: #ffffff;
                    font-size: 1.75rem;
                    cursor: pointer;
                }

                .video-play:hover {
                    background: #0d9488;
                }

                .video-note {
                    background: #ffffff;
                    border: 1px solid #e2e8f0;
                    border-radius: 14px;
                    padding: 1.5rem;
                }

                .video-note p {
                    color: #475569;
                    margin-bottom: 0;
                }

                .testimonial-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .testimonial-card {
                    background: #f0fdfa;
                    border: 1px solid #ccfbf1;
                    border-radius: 16px;
                    overflow: hidden;
                    box-shadow: 0 12px 30px rgba(15, 23, 42, 0.12);
                }

                .testimonial-header {
                    background: linear-gradient(to right, #0d9488, #0f766e);
                    padding: 1rem 1.5rem;
                }

                .testimonial-header h4 {
                    margin: 0;
                    color: #ffffff;
                    font-size: 1.2rem;
                }

                .testimonial-body {
                    padding: 1.5rem;
                }

                .testimonial-stars {
                    color: #f59e0b;
                    letter-spacing: 0.2rem;
                    margin-bottom: 0.75rem;
                }

                .testimonial-body p {
                    margin: 0;
                    font-style: italic;
                    color: #334155;
                    line-height: 1.7;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 1.5rem;
                    align-items: stretch;
                }

                .contact-side {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .contact-map {
                    flex: 1;
                    min-height: 260px;
                    border-radius: 14px;
                    overflow: hidden;
                    box-shadow: 0 8px 24px rgba(15, 23, 42, 0.12);
                }

                .contact-map iframe {
                    width: 100%;
                    height: 100%;
                    border: none;
                }

                .contact-info {
                    background: #ffffff;
                    border-radius: 14px;
                    padding: 1.25rem;
                    box-shadow: 0 8px 24px rgba(15, 23, 42, 0.12);
                }

                .contact-info-item {
                    margin-bottom: 1rem;
                }

                .contact-info-item h4 {
                    margin: 0 0 0.25rem;
                    font-size: 0.95rem;
                }

                .contact-info-item p {
                    margin: 0;
                    font-size: 0.9rem;
                    color: #475569;
                }

                .contact-main {
                    background: #e0e7ff;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 8px 24px rgba(15, 23, 42, 0.12);
                }

                .site-footer {
                    background: #0b0f14;
                    color: #ffffff;
                    margin-top: 2.5rem;
                    padding: 2rem;
                    text-align: center;
                }

                .site-footer > h3 {
                    font-weight: 300;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #a8bdb1;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr 2fr;
                    gap: 2.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2.5rem 0;
                    border-top: 1px solid #c8d8d0;
                    border-bottom: 1px solid #c8d8d0;
                    text-align: left;
                }

                .footer-links {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .footer-links h4 {
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    font-weight: 400;
                }

                .footer-links a {
                    color: #ffffff;
                    text-decoration: none;
                    font-weight: 300;
                    font-size: 0.9rem;
                }

                .footer-blurb {
                    font-weight: 300;
                    line-height: 1.6;
                }

                .footer-copyright {
                    padding-top: 1.5rem;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    font-weight: 300;
                }

                @media (max-width: 900px) {
                    .hero-grid,
                    .about-grid,
                    .metrics-grid,
                    .how-to-grid,
                    .feature-grid,
                    .testimonial-grid,
                    .contact-grid,
                    .feature-banner,
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }

                    .about-grid.reversed .about-copy {
                        order: 2;
                    }

                    .hero-copy h1 {
                        font-size: 2.75rem;
                    }

                    .section-intro h2 {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::star_row;

    #[test]
    fn star_row_repeats_per_rating() {
        assert_eq!(star_row(5), "★★★★★");
        assert_eq!(star_row(1), "★");
    }

    #[test]
    fn star_row_empty_for_zero() {
        assert_eq!(star_row(0), "");
    }
}

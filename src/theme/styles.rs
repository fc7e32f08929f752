//! Global CSS styles for the invitation page.
//!
//! One stylesheet injected at the app root. Class names double as the
//! signaling flags the components toggle: `visible` for scroll-triggered
//! entry, `active` for the current indicator and the finale overlay,
//! `countdown-urgent` when the wedding is a day away or less.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* OLIVE (Primary, Accents) */
  --olive: #556b2f;
  --olive-light: #6b8e23;
  --olive-soft: rgba(85, 107, 47, 0.15);

  /* CREAM (Backgrounds) */
  --cream: #faf7f2;
  --cream-dark: #f0ead9;
  --card-border: #e4dcc8;

  /* TEXT */
  --text-primary: #3a3a33;
  --text-secondary: rgba(58, 58, 51, 0.7);
  --text-on-olive: #faf7f2;

  /* SEMANTIC */
  --urgent: #b63a2e;
  --gold: #c7a252;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Lato', 'Helvetica Neue', sans-serif;

  /* Transitions */
  --transition-fast: 200ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 800ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--cream);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Scroll-triggered entry animation === */
.fade-in-up {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.fade-in-up.visible {
  opacity: 1;
  transform: translateY(0);
}

.fade-in {
  animation: fade-in 1.5s ease both;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  background: linear-gradient(rgba(85, 107, 47, 0.55), rgba(85, 107, 47, 0.55)),
              var(--cream-dark);
  color: var(--text-on-olive);
  padding: 2rem;
}

.hero-kicker {
  font-family: var(--font-sans);
  font-size: 0.9rem;
  letter-spacing: 0.4em;
  text-transform: uppercase;
}

.hero-names {
  font-family: var(--font-serif);
  font-size: clamp(3rem, 9vw, 5.5rem);
  font-weight: 400;
  margin: 1rem 0;
}

.hero-names .amp {
  color: var(--gold);
  font-style: italic;
  margin: 0 0.3em;
}

.hero-date {
  display: flex;
  align-items: baseline;
  justify-content: center;
  gap: 0.75rem;
  font-family: var(--font-serif);
  font-size: 1.5rem;
}

.hero-date .date-day,
.hero-date .date-year {
  font-size: 2rem;
}

.hero-date .date-month {
  text-transform: uppercase;
  letter-spacing: 0.25em;
  font-size: 1.1rem;
  border-left: 1px solid var(--gold);
  border-right: 1px solid var(--gold);
  padding: 0 0.75rem;
}

.scroll-indicator {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  background: none;
  border: none;
  color: var(--text-on-olive);
  font-size: 1.5rem;
  cursor: pointer;
  animation: bob 2s ease-in-out infinite;
}

@keyframes bob {
  0%, 100% { transform: translate(-50%, 0); }
  50% { transform: translate(-50%, 8px); }
}

/* === Sections === */
section {
  padding: 5rem 1.5rem;
  max-width: 56rem;
  margin: 0 auto;
}

.section-header {
  font-family: var(--font-serif);
  font-size: 2rem;
  font-weight: 400;
  color: var(--olive);
  text-align: center;
  margin-bottom: 2rem;
}

.body-text {
  font-size: 1rem;
  color: var(--text-secondary);
  text-align: center;
  max-width: 38rem;
  margin: 0 auto;
}

/* === Countdown === */
.countdown-grid {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.count-unit {
  background: #fff;
  border: 1px solid var(--card-border);
  border-radius: 8px;
  padding: 1.25rem 1rem;
  min-width: 5.5rem;
  text-align: center;
  transition: border-color var(--transition-normal), color var(--transition-normal);
}

.count-value {
  display: block;
  font-family: var(--font-serif);
  font-size: 2.5rem;
  color: var(--olive);
  animation: tick-pulse 200ms ease;
}

.count-label {
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-secondary);
}

/* Brief scale pulse replayed whenever a digit remounts with a new value */
@keyframes tick-pulse {
  from { transform: scale(1.1); }
  to { transform: scale(1); }
}

.countdown-urgent .count-unit {
  border-color: var(--urgent);
}

.countdown-urgent .count-value {
  color: var(--urgent);
}

/* === Finale overlay === */
.wedding-end-overlay {
  position: fixed;
  inset: 0;
  display: none;
  align-items: center;
  justify-content: center;
  flex-direction: column;
  gap: 1rem;
  background: rgba(58, 58, 51, 0.92);
  z-index: 40;
  padding: 2rem;
}

.wedding-end-overlay.active {
  display: flex;
}

.wedding-end-title {
  font-family: var(--font-serif);
  font-size: 2rem;
  color: var(--cream);
}

.finale-video {
  max-width: min(90vw, 48rem);
  max-height: 70vh;
  border-radius: 8px;
}

.wedding-end-hint {
  color: var(--cream);
  font-size: 0.9rem;
  opacity: 0.8;
}

/* === Gallery carousel === */
.gallery-carousel {
  position: relative;
}

.carousel-viewport {
  overflow: hidden;
  border-radius: 10px;
  border: 1px solid var(--card-border);
}

.carousel-track {
  display: flex;
  transition: transform 500ms ease;
}

.carousel-slide {
  flex: 1 0 0;
  aspect-ratio: 3 / 2;
  background: var(--cream-dark);
}

.carousel-slide img,
.lazy-placeholder {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.carousel-btn {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  background: rgba(250, 247, 242, 0.85);
  border: 1px solid var(--card-border);
  border-radius: 50%;
  width: 2.75rem;
  height: 2.75rem;
  font-size: 1.5rem;
  color: var(--olive);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.carousel-btn:hover {
  background: var(--cream);
}

.carousel-prev { left: 0.75rem; }
.carousel-next { right: 0.75rem; }

.carousel-indicators {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
  margin-top: 1rem;
}

.indicator {
  width: 10px;
  height: 10px;
  border-radius: 50%;
  border: none;
  background: var(--olive-soft);
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.indicator.active {
  background: var(--olive);
  transform: scale(1.2);
}

/* === Music control === */
.music-btn {
  position: fixed;
  bottom: 1.5rem;
  right: 1.5rem;
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  border: 1px solid var(--card-border);
  background: var(--cream);
  color: var(--olive);
  font-size: 1.25rem;
  cursor: pointer;
  z-index: 30;
  box-shadow: 0 2px 8px rgba(58, 58, 51, 0.15);
}

.music-icon.playing {
  display: inline-block;
  animation: sway 1.2s ease-in-out infinite;
}

@keyframes sway {
  0%, 100% { transform: rotate(-8deg); }
  50% { transform: rotate(8deg); }
}

/* === Reception / details === */
.detail-card {
  background: #fff;
  border: 1px solid var(--card-border);
  border-radius: 10px;
  padding: 2rem;
  text-align: center;
  margin-top: 1.5rem;
}

.detail-card h3 {
  font-family: var(--font-serif);
  font-weight: 400;
  color: var(--olive);
  font-size: 1.4rem;
  margin-bottom: 0.5rem;
}

.reception-photo {
  margin-top: 1.5rem;
  border-radius: 10px;
  overflow: hidden;
  aspect-ratio: 3 / 2;
}

/* === Footer === */
.footer {
  text-align: center;
  padding: 2.5rem 1rem;
  background: var(--olive);
  color: var(--text-on-olive);
  font-family: var(--font-serif);
  font-size: 1.1rem;
}
"#;

//! Global CSS styles for the Styleloft storefront.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* CANVAS (Backgrounds) */
  --canvas-white: #fdfbf9;
  --canvas-shade: #f5f0ec;
  --canvas-border: #e8e0da;

  /* ROSE (Brand, Actions) */
  --rose: #ff3f6c;
  --rose-deep: #d62955;
  --rose-glow: rgba(255, 63, 108, 0.18);

  /* TEAL (Links, Accents) */
  --teal: #03a685;

  /* TEXT */
  --text-primary: #282c3f;
  --text-secondary: rgba(40, 44, 63, 0.72);
  --text-muted: rgba(40, 44, 63, 0.5);

  /* Typography */
  --font-serif: 'Playfair Display', Georgia, serif;
  --font-sans: 'Assistant', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--canvas-white);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 600;
  color: var(--rose);
  letter-spacing: 0.04em;
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 500;
  color: var(--text-primary);
}

.body-text {
  font-size: var(--text-base);
  color: var(--text-secondary);
  line-height: 1.7;
  max-width: 42rem;
}

.highlight-term {
  color: var(--rose-deep);
  font-weight: 600;
}

/* === Landing Page === */
.landing {
  position: relative;
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 3rem;
  padding: 2rem;
  text-align: center;
}

.landing-backdrop {
  position: absolute;
  inset: 0;
  background:
    radial-gradient(ellipse at top left, var(--rose-glow), transparent 55%),
    radial-gradient(ellipse at bottom right, rgba(3, 166, 133, 0.12), transparent 55%);
  pointer-events: none;
}

.landing-header {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

.tagline {
  font-size: var(--text-lg);
  color: var(--text-secondary);
  letter-spacing: 0.12em;
  text-transform: lowercase;
}

.btn-enter {
  margin-top: 1.5rem;
  padding: 0.85rem 2.5rem;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  font-weight: 700;
  letter-spacing: 0.06em;
  text-transform: uppercase;
  color: #fff;
  background: var(--rose);
  border: none;
  border-radius: 4px;
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-enter:hover {
  background: var(--rose-deep);
  transform: translateY(-1px);
}

.pitch-section {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
}

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: var(--canvas-white);
  border-bottom: 1px solid var(--canvas-border);
  box-shadow: 0 1px 6px rgba(40, 44, 63, 0.06);
}

.nav-header-inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
  display: flex;
  align-items: center;
  gap: 3rem;
}

.app-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 600;
  color: var(--rose);
  cursor: pointer;
  user-select: none;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 1.75rem;
}

.nav-link {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  font-size: var(--text-sm);
  font-weight: 600;
  letter-spacing: 0.04em;
  text-transform: uppercase;
  text-decoration: none;
  color: var(--text-secondary);
  padding: 0.35rem 0;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-link.active {
  color: var(--text-primary);
  border-bottom-color: var(--rose);
}

.nav-link-icon {
  display: inline-flex;
  align-items: center;
}

/* === Search Bar === */
.search-bar {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  max-width: 36rem;
  margin: 1.5rem auto;
}

.search-input {
  flex: 1;
  padding: 0.65rem 1rem;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  color: var(--text-primary);
  background: var(--canvas-shade);
  border: 1px solid var(--canvas-border);
  border-radius: 4px;
  outline: none;
  transition: border-color var(--transition-fast);
}

.search-input:focus {
  border-color: var(--rose);
  background: var(--canvas-white);
}

.search-input::placeholder {
  color: var(--text-muted);
}

.search-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.65rem 0.9rem;
  color: #fff;
  background: var(--rose);
  border: none;
  border-radius: 4px;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.search-btn:hover {
  background: var(--rose-deep);
}

/* === Storefront === */
.storefront {
  max-width: 72rem;
  margin: 0 auto;
  padding: 1rem 1.5rem 3rem;
}

/* === Banner Gallery === */
.banner-gallery-section {
  margin-top: 2.25rem;
}

.banner-gallery__title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 600;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--text-primary);
  margin-bottom: 1rem;
}

.banner-gallery {
  display: flex;
  flex-wrap: wrap;
  gap: 0.9rem;
}

.banner-gallery__item {
  flex: 0 0 auto;
  border-radius: 6px;
  overflow: hidden;
  background: var(--canvas-shade);
  box-shadow: 0 1px 4px rgba(40, 44, 63, 0.08);
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.banner-gallery__item:hover {
  transform: translateY(-2px);
  box-shadow: 0 4px 12px rgba(40, 44, 63, 0.14);
}

.banner-gallery__img {
  display: block;
  height: 10rem;
  width: auto;
}

/* === Results === */
.results {
  max-width: 72rem;
  margin: 0 auto;
  padding: 2rem 1.5rem 3rem;
}

.results-empty {
  margin-top: 1.5rem;
  color: var(--text-muted);
  font-size: var(--text-base);
}

.results-grid {
  margin-top: 1.5rem;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(13rem, 1fr));
  gap: 1.25rem;
}

.item-card {
  display: flex;
  flex-direction: column;
  background: var(--canvas-white);
  border: 1px solid var(--canvas-border);
  border-radius: 6px;
  overflow: hidden;
  transition: box-shadow var(--transition-fast);
}

.item-card:hover {
  box-shadow: 0 4px 14px rgba(40, 44, 63, 0.12);
}

.item-card__img {
  display: block;
  width: 100%;
  aspect-ratio: 3 / 4;
  object-fit: cover;
  background: var(--canvas-shade);
}

.item-card__description {
  padding: 0.75rem 0.9rem 1rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Responsive === */
@media (max-width: 640px) {
  .nav-header-inner {
    gap: 1.25rem;
  }

  .nav-link-label {
    display: none;
  }

  .banner-gallery__img {
    height: 7rem;
  }
}
"#;
